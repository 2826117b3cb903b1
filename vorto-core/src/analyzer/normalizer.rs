/// The Esperanto alphabet, lowercase.
pub const ALPHABET: &str = "abcĉdefgĝhĥijĵklmnoprsŝtuŭvz";

/// Punctuation a number token may contain besides digits and spaces.
pub const PUNCTUATION: &str = "-–\"',.:;?!()";

/// Lowercased output byte for every ASCII input byte, or 0 when the byte is
/// dropped. Space maps to itself; q, w, x and y are not Esperanto letters.
const ASCII_KEEP: [u8; 128] = build_ascii_table();

const fn build_ascii_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0usize;
    while b < 128 {
        let lower = (b as u8).to_ascii_lowercase();
        table[b] = match lower {
            b'q' | b'w' | b'x' | b'y' => 0,
            b'a'..=b'z' | b'0'..=b'9' | b' ' => lower,
            _ => 0,
        };
        b += 1;
    }
    table
}

/// Returns `true` for the six accented Esperanto letters.
#[inline(always)]
const fn is_accented_letter(c: char) -> bool {
    matches!(c, 'ĉ' | 'ĝ' | 'ĥ' | 'ĵ' | 'ŝ' | 'ŭ')
}

/// Returns `true` for characters a token may consist of: lowercase
/// Esperanto letters and ASCII digits.
#[inline]
pub fn is_token_char(c: char) -> bool {
    if c.is_ascii() {
        c != ' ' && ASCII_KEEP[c as usize] == c as u8
    } else {
        is_accented_letter(c)
    }
}

/// Cleans raw text down to the fixed Esperanto character set.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Drops every character that is not an Esperanto letter, an ASCII digit
///   or U+0020 space; tabs and newlines are dropped, not turned into spaces
/// - Collapses runs of spaces into one and trims both ends
///
/// The output is idempotent under a second pass.
///
/// # Examples
///
/// ```
/// use vorto_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  Ĉu vi VIDAS?  "), "ĉu vi vidas");
/// assert_eq!(normalizer.normalize("x-ray"), "ra");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut prev_space = true;
        let mut push = |c: char, out: &mut String| {
            if c == ' ' {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            } else {
                out.push(c);
                prev_space = false;
            }
        };

        // ASCII prefix: one table lookup per byte, no case mapping needed
        let ascii_len = input.bytes().take_while(u8::is_ascii).count();
        for &b in &input.as_bytes()[..ascii_len] {
            let kept = ASCII_KEEP[b as usize];
            if kept != 0 {
                push(kept as char, out);
            }
        }

        for c in input[ascii_len..].chars() {
            for lower in c.to_lowercase() {
                if lower.is_ascii() {
                    let kept = ASCII_KEEP[lower as usize];
                    if kept != 0 {
                        push(kept as char, out);
                    }
                } else if is_accented_letter(lower) {
                    push(lower, out);
                }
            }
        }

        if out.ends_with(' ') {
            out.pop();
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
