// Splitting and trimming of delimited path lists.

use crate::error::{ConfigError, Result};

/// Characters stripped from both ends of every token.
pub const IGNORABLE: [char; 5] = [' ', '\t', '\n', '\'', '"'];

/// The delimiter used for every path list on the command line and in the
/// interactive dialogue.
pub const LIST_DELIMITER: char = ',';

/// Which list a raw string is being parsed for. Inputs and outputs treat
/// emptiness differently, so the role travels with the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRole {
    Input,
    Output,
}

/// Strip spaces, tabs, newlines and quote characters from both ends.
pub fn trim(raw: &str) -> &str {
    raw.trim_matches(|c| IGNORABLE.contains(&c))
}

/// Split `raw` on `delimiter` and trim every piece.
///
/// Order is preserved, duplicates are kept and pieces may be empty. A quoted
/// delimiter still splits; there is no escaping.
pub fn split_and_trim(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter).map(|s| trim(s).to_string()).collect()
}

/// Parse a raw list for the given role.
///
/// __Input:__ blank tokens are dropped; an empty result is
/// [`ConfigError::InvalidInputFormat`].
///
/// __Output:__ a raw string that is empty (after trimming ignorable
/// characters) means skip-all and yields an empty list. Otherwise blank
/// tokens are kept so positions still line up with the inputs, but a list
/// made only of blank tokens is [`ConfigError::InvalidOutputFormat`].
///
pub fn parse_list(raw: &str, role: ListRole) -> Result<Vec<String>> {
    match role {
        ListRole::Input => {
            let paths: Vec<String> = split_and_trim(raw, LIST_DELIMITER)
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();

            if paths.is_empty() {
                return Err(ConfigError::InvalidInputFormat);
            }
            Ok(paths)
        }
        ListRole::Output => {
            // skip-all is checked before tokenizing
            if trim(raw).is_empty() {
                return Ok(Vec::new());
            }

            let paths = split_and_trim(raw, LIST_DELIMITER);
            if paths.iter().all(|s| s.is_empty()) {
                return Err(ConfigError::InvalidOutputFormat);
            }
            Ok(paths)
        }
    }
}
