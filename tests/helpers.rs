use wrapped_base64::*;

pub fn compare_decode(expected: &str, target: &str) {
    assert_eq!(
        expected,
        String::from_utf8(decode(target).unwrap()).unwrap()
    );
    assert_eq!(
        expected,
        String::from_utf8(decode(target.as_bytes()).unwrap()).unwrap()
    );
}

/// A way of laying out the newlines of encoded text. The decoder must accept all of them.
pub trait Layout {
    fn apply(&self, encoded: &str) -> String;
}

/// As the encoder wrote it.
pub struct Canonical {}

impl Layout for Canonical {
    fn apply(&self, encoded: &str) -> String {
        encoded.to_string()
    }
}

/// One long line, no newlines at all.
pub struct Unwrapped {}

impl Layout for Unwrapped {
    fn apply(&self, encoded: &str) -> String {
        encoded.chars().filter(|&c| c != '\n').collect()
    }
}

/// A newline after every symbol, padding included.
pub struct EverySymbol {}

impl Layout for EverySymbol {
    fn apply(&self, encoded: &str) -> String {
        Unwrapped {}
            .apply(encoded)
            .chars()
            .flat_map(|c| [c, '\n'])
            .collect()
    }
}

/// Re-wrapped at a narrower width, with blank lines before and after.
pub struct Rewrapped76 {}

impl Layout for Rewrapped76 {
    fn apply(&self, encoded: &str) -> String {
        let unwrapped = Unwrapped {}.apply(encoded);

        let mut rewrapped = String::from("\n\n");
        for (index, c) in unwrapped.chars().enumerate() {
            if index > 0 && index % 76 == 0 {
                rewrapped.push('\n');
            }
            rewrapped.push(c);
        }
        rewrapped.push_str("\n\n\n");

        rewrapped
    }
}
