/// Marker that starts a CUDA local build tag, as in `torch==2.1.0+cu121`.
pub const CUDA_POSTFIX_MARKER: &str = "+cu";

/// Remove a CUDA build tag from a pin.
///
/// `pip install -r` rejects local tags such as `+cu121` unless an extra index
/// serves them, so everything from the marker on is dropped.
pub fn strip(pin: &str) -> &str {
    match pin.split_once(CUDA_POSTFIX_MARKER) {
        Some((head, _)) => head,
        None => pin,
    }
}
