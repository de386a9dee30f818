//! Upload admission: which documents may be hashed and recorded.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

/// 16 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub fn default_allowed_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "pdf", "txt"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

/// Extension allow-list and size cap for uploaded documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPolicy {
    /// Lowercase extensions without the dot.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    /// Whether the filename's extension is allowed (case-insensitive).
    pub fn allows(&self, filename: &str) -> bool {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
    }

    pub fn check(&self, filename: &str, size: u64) -> Result<(), UploadError> {
        if filename.trim().is_empty() {
            return Err(UploadError::EmptyFilename);
        }
        if !self.allows(filename) {
            return Err(UploadError::ExtensionNotAllowed {
                filename: filename.to_string(),
            });
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Reduce a client-supplied name to a safe single path component.
///
/// Accented Latin letters lose their accent (`é` becomes `e`), then only
/// ASCII alphanumerics, `.`, `-` and `_` are kept; whitespace runs become `_`;
/// leading dots and underscores are stripped. Letters with no ASCII base
/// (`ß`, `ø`, CJK) are dropped. May return an empty string.
pub fn secure_filename(name: &str) -> String {
    let base = Path::new(&name.replace('\\', "/"))
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut out = String::with_capacity(base.len());
    let mut in_space = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        let c = strip_accent(c);
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c);
        }
    }

    out.trim_start_matches(['.', '_']).trim_end_matches('_').to_string()
}

/// ASCII base letter of a precomposed Latin-1 / Latin Extended-A letter.
fn strip_accent(c: char) -> char {
    match c {
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ď' => 'D',
        'ď' => 'd',
        'È'..='Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'Ĥ' => 'H',
        'ĥ' => 'h',
        'Ì'..='Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'Ĵ' => 'J',
        'ĵ' => 'j',
        'Ķ' => 'K',
        'ķ' => 'k',
        'Ĺ' | 'Ļ' | 'Ľ' => 'L',
        'ĺ' | 'ļ' | 'ľ' => 'l',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'Ò'..='Ö' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'ò'..='ö' | 'ō' | 'ŏ' | 'ő' => 'o',
        'Ŕ' | 'Ŗ' | 'Ř' => 'R',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'Ţ' | 'Ť' => 'T',
        'ţ' | 'ť' => 't',
        'Ù'..='Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ŵ' => 'W',
        'ŵ' => 'w',
        'Ý' | 'Ŷ' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}
