//! Direct-download URL composition for files inside a share.

use super::ShareReference;
use crate::video::VideoEntry;

/// WebDAV endpoint for public shares, relative to the server root.
const PUBLIC_DAV_PREFIX: [&str; 3] = ["public.php", "dav", "files"];

/// Builds `<scheme>://<host>[/<base>]/public.php/dav/files/<token>[/<dir>]/<filename>`.
///
/// `<dir>` is the entry's own folder when known (nothing for the share
/// root), otherwise the share subpath. Every segment is percent-encoded on its own, so a `/`
/// inside the filename becomes `%2F` while separators stay literal.
pub fn build_download_url(share: &ShareReference, entry: &VideoEntry) -> String {
    let dir = match entry.folder() {
        Some(folder) => Some(folder).filter(|f| !f.is_empty()),
        None => share.subpath(),
    };

    let mut url = share.origin().clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        if let Some(base) = share.base_path() {
            segments.extend(base.split('/'));
        }
        segments.extend(PUBLIC_DAV_PREFIX);
        segments.push(share.token());
        if let Some(dir) = dir {
            segments.extend(dir.split('/'));
        }
        segments.push(entry.filename());
    }
    url.to_string()
}
