use anyhow::{bail, Result};

/// Synthetic aggregate the UI offers alongside the real keywords. It only
/// ever expands to the full catalog; it is never sent to the backend.
pub const SELECT_ALL: &str = "all";

/// The fixed keyword catalog the backend search understands.
pub const CATALOG: &[&str] = &[
    "NSF Recompete Pilot Program",
    "Economic Development Agency (EDA)",
    "CHIPS Act",
    "Semiconductors",
    "EDA's Impact Newsletter",
    "AI Legislation",
    "University",
    "Research",
    "Research Expenditures",
    "Research Grant/Award",
    "Federal AI Legislation",
    "Pittsburgh",
    "Nashville",
    "Georgia",
    "Texas",
    "HBCUs",
    "Tech Hub",
    "Economic Impact",
];

/// An immutable selection over the true keyword set. Transitions consume the
/// selection and return the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<&'static str>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_all(self) -> Self {
        Self {
            selected: CATALOG.to_vec(),
        }
    }

    pub fn clear(self) -> Self {
        Self { selected: Vec::new() }
    }

    /// Toggle one keyword in or out of the selection. Toggling the `all`
    /// aggregate selects the full catalog when incomplete and clears it when
    /// complete, mirroring how the aggregate behaves as a pseudo-item.
    pub fn toggle(self, keyword: &str) -> Result<Self> {
        if keyword == SELECT_ALL {
            return Ok(if self.is_complete() {
                self.clear()
            } else {
                self.select_all()
            });
        }

        let Some(canonical) = CATALOG.iter().copied().find(|k| *k == keyword) else {
            bail!("Unknown keyword: '{}' (see `fedscope keywords`)", keyword);
        };

        let mut selected = self.selected;
        match selected.iter().position(|k| *k == canonical) {
            Some(i) => {
                selected.remove(i);
            }
            None => selected.push(canonical),
        }
        Ok(Self { selected })
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// True when every catalog keyword is selected.
    pub fn is_complete(&self) -> bool {
        self.selected.len() == CATALOG.len()
    }

    /// The true keyword values to put on the wire. The aggregate is not a
    /// keyword and can never appear here.
    pub fn request_keywords(&self) -> Vec<String> {
        self.selected.iter().map(|k| k.to_string()).collect()
    }
}

// ── Tests ──
