/// Deterministic accent color via CRC32 hash of the game title.
/// Returns (r, g, b) from the first 3 bytes of the hash; used for the
/// sidebar group swatches so a game keeps its color across reloads.
pub fn game_color(title: &str) -> (u8, u8, u8) {
    let hash = crc32fast::hash(title.as_bytes());
    let bytes = hash.to_be_bytes();
    (bytes[0], bytes[1], bytes[2])
}

#[cfg(test)]
mod tests {
    use super::game_color;

    #[test]
    fn game_color_is_deterministic() {
        assert_eq!(game_color("Starfall Tactics"), game_color("Starfall Tactics"));
    }

    #[test]
    fn game_color_varies_for_different_titles() {
        assert_ne!(game_color("Starfall Tactics"), game_color("Ironsight Arena"));
    }
}
