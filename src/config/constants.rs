/// Scope levels partition declarations into global and local visibility.
pub type ScopeLevel = u32;

pub const GLOBAL_SCOPE: ScopeLevel = 0;
pub const LOCAL_SCOPE: ScopeLevel = 1;

/// Bucket count shared by the symbol table and dictionaries.
pub const HASH_TABLE_SIZE: usize = 101;

/// Multiplier of the polynomial rolling hash used for names and string keys.
pub const HASH_MULTIPLIER: u64 = 31;

/// Byte bounds for stored text, terminator slot included.
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_TYPE_LENGTH: usize = 32;
pub const MAX_STRING_LENGTH: usize = 64;

/// Deepest the parser stack may grow.
pub const MAX_STACK_DEPTH: usize = 100;

/// Most classified tokens a single input line may produce, end marker included.
pub const MAX_INPUT_TOKENS: usize = 1000;

pub const ARRAY_INITIAL_CAPACITY: usize = 10;

/// Source name used when the caller does not supply one.
pub const DEFAULT_SOURCE_NAME: &str = "shell";

/// Truncates `text` so it fits a buffer of `limit` bytes including the
/// terminator slot, never splitting a character.
pub fn bounded(text: &str, limit: usize) -> String {
    let max = limit.saturating_sub(1);
    if text.len() <= max {
        return text.to_string();
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
