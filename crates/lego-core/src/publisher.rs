use serde::{Deserialize, Serialize};

/// Publishers per leaning; the registry holds one block of each.
pub const PER_LEANING: usize = 55;

// ---------------------------------------------------------------------------
// Leaning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leaning {
    Republican,
    Democrat,
}

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: String,
    pub name: String,
    pub leaning: Leaning,
}

// ---------------------------------------------------------------------------
// PublisherRegistry
// ---------------------------------------------------------------------------

/// Static roster of 110 publishers: `pub_rep_{0..54}` followed by
/// `pub_dem_{0..54}`. Built once at startup and read-only afterwards, so it
/// can be shared across concurrent requests without locking.
#[derive(Debug)]
pub struct PublisherRegistry {
    publishers: Vec<Publisher>,
}

impl PublisherRegistry {
    pub fn new() -> Self {
        let mut publishers = Vec::with_capacity(PER_LEANING * 2);
        for i in 0..PER_LEANING {
            publishers.push(Publisher {
                id: format!("pub_rep_{i}"),
                name: format!("Republican Publisher {i}"),
                leaning: Leaning::Republican,
            });
        }
        for i in 0..PER_LEANING {
            publishers.push(Publisher {
                id: format!("pub_dem_{i}"),
                name: format!("Democrat Publisher {i}"),
                leaning: Leaning::Democrat,
            });
        }
        Self { publishers }
    }

    /// The full roster in registration order, unfiltered.
    pub fn all(&self) -> &[Publisher] {
        &self.publishers
    }

    /// Resolve a filter criterion to a subset of the roster.
    ///
    /// `"Republican"` and `"Democrat"` select by leaning; a criterion
    /// starting with `pub_` selects by exact id (0 or 1 matches). Any other
    /// criterion, or none, silently falls back to the full roster — callers
    /// never see an error for an unrecognized filter.
    pub fn filter(&self, criterion: Option<&str>) -> Vec<&Publisher> {
        match criterion {
            Some("Republican") => self
                .publishers
                .iter()
                .filter(|p| p.leaning == Leaning::Republican)
                .collect(),
            Some("Democrat") => self
                .publishers
                .iter()
                .filter(|p| p.leaning == Leaning::Democrat)
                .collect(),
            Some(id) if id.starts_with("pub_") => {
                self.publishers.iter().filter(|p| p.id == id).collect()
            }
            _ => self.publishers.iter().collect(),
        }
    }
}

impl Default for PublisherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
