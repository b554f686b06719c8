/// Returns the position of the query delimiter and of the fragment marker.
///
/// The query delimiter is the first `?` not directly followed by another `?`,
/// so a run like `??` keeps all but its last `?` inside the path.
/// Anything after `#` is ignored.
pub(crate) fn find_border(url: &str) -> (Option<usize>, Option<usize>) {
    let bytes = url.as_bytes();
    let mut query_loc = None;

    for (i, byte) in bytes.iter().enumerate() {
        match byte {
            b'#' => return (query_loc, Some(i)),
            b'?' if query_loc.is_none() && bytes.get(i + 1) != Some(&b'?') => {
                query_loc = Some(i);
            }
            _ => {}
        }
    }
    (query_loc, None)
}
