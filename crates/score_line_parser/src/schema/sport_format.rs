use serde::{Deserialize, Serialize};

use crate::fragments::{split_digit_runs, strip_edges};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SportFormat {
    Soccer,
    Tennis,
    AmericanFootball,
    Unrecognized,
}

impl SportFormat {
    /// Decides which score line format `text` matches.
    ///
    /// Works off the interleaved digit-run fragments and probes them in a
    /// fixed priority order, first hit wins:
    ///
    /// 1. fragment 4 missing or empty -> `Unrecognized`
    /// 2. fragments 5 and 6 both missing -> `Soccer` (their concatenation is
    ///    the football probe; a plain two-score line has no sixth fragment,
    ///    and that absence is the only way the probe fails to read as a
    ///    number)
    /// 3. fragment 4 minus its first and last characters is empty -> `Tennis`
    /// 4. otherwise -> `AmericanFootball`
    ///
    /// The chain is deliberately positional and order-sensitive; inputs with
    /// no team names at all, like " 1-2 ", still land in `Soccer` here.
    pub fn detect(text: &str) -> Self {
        let fragments = split_digit_runs(text);

        match fragments.get(4) {
            None => SportFormat::Unrecognized,
            Some(probe) if probe.is_empty() => SportFormat::Unrecognized,
            Some(probe) => {
                if fragments.get(5).is_none() && fragments.get(6).is_none() {
                    SportFormat::Soccer
                } else if strip_edges(probe).is_empty() {
                    SportFormat::Tennis
                } else {
                    SportFormat::AmericanFootball
                }
            }
        }
    }
}
