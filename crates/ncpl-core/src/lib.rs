pub mod config;
pub mod logging;

pub mod debug_dump;
pub mod edit;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod playlist;
pub mod prompt;
pub mod session;
pub mod share;
pub mod video;

pub use error::{FetchError, PlaylistError};
pub use extract::{extract_video_filenames, filter_by_subpath};
pub use playlist::{playlist_entries, render_m3u, PlaylistEntry};
pub use share::{build_download_url, parse_share_url, ShareReference};
pub use video::VideoEntry;
