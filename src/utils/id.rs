const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a random identifier of `len` characters from `A-Z0-9`
///
/// # Examples
/// ```
/// use booking_client::utils::id::get_id;
/// let id = get_id(12);
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn get_id(len: usize) -> String {
    nanoid::nanoid!(len, &ALPHABET)
}

/// Builds a name that is unique per call, e.g. `Damian7K2Q9ZP1`
///
/// Used to create bookings that a query filter can find unambiguously.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}{}", get_id(8))
}
