// src/common/utils.rs
use serde::{Deserialize, Serialize};

/// Thousands/decimal separator convention used by a source page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberFormat {
    /// `1,234.56`: comma groups thousands, dot is the decimal marker.
    CommaThousands,
    /// `1.234,56`: dot groups thousands, comma is the decimal marker.
    DotThousands,
}

impl NumberFormat {
    /// Rewrite locale-formatted cell text into a string `f64::from_str` accepts.
    pub fn normalize(&self, raw: &str) -> String {
        let text = raw.trim();
        match self {
            NumberFormat::CommaThousands => text.replace(',', ""),
            NumberFormat::DotThousands => {
                if text.contains(',') {
                    return text.replace('.', "").replace(',', ".");
                }
                // No decimal comma: dots only group thousands when every group is 3 digits,
                // so canonical input such as "1234.56" passes through untouched.
                if text.contains('.') && text.split('.').skip(1).all(is_thousands_group) {
                    text.replace('.', "")
                } else {
                    text.to_string()
                }
            }
        }
    }
}

fn is_thousands_group(group: &str) -> bool {
    group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit())
}

// Normalize and parse a rate cell, None when the text is not a finite number
pub fn parse_rate(raw: &str, format: NumberFormat) -> Option<f64> {
    let normalized = format.normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
