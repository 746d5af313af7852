/*!
Frequency and polarity statistics of an atom, used to make decisions.

Each atom has:
- A *live* frequency, a count of occurrences in clauses which is available to the decision procedure only while the atom has no value.
  While the atom has a value the live frequency is excluded, and any bump to the frequency is made to the snapshot only.
- A *snapshot* of the frequency, restored to the live frequency when the atom loses its value.
  The snapshot is the frequency subject to decay.
- A net *polarity* count, incremented for each positive occurrence and decremented for each negative occurrence.

Occurrences are counted in original clauses and in clauses learnt during a solve alike.
*/

/// A count of occurrences of an atom.
pub type Frequency = u32;

/// A net count of the polarity of occurrences of an atom.
pub type Polarity = i64;

/// Frequency and polarity statistics of an atom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyCell {
    live: Option<Frequency>,
    snapshot: Frequency,
    polarity: Polarity,
}

impl FrequencyCell {
    /// A cell for an atom without any occurrence.
    pub fn fresh() -> Self {
        FrequencyCell {
            live: Some(0),
            snapshot: 0,
            polarity: 0,
        }
    }

    /// Notes an occurrence of the atom, with the given polarity.
    pub fn note_occurrence(&mut self, polarity: bool) {
        if let Some(live) = self.live.as_mut() {
            *live = live.saturating_add(1);
        }
        self.snapshot = self.snapshot.saturating_add(1);
        match polarity {
            true => self.polarity += 1,
            false => self.polarity -= 1,
        }
    }

    /// Excludes the live frequency, as the atom has been valued.
    pub fn exclude(&mut self) {
        self.live = None;
    }

    /// Restores the live frequency from the snapshot, as the atom has lost its value.
    pub fn restore(&mut self) {
        self.live = Some(self.snapshot);
    }

    /// Halves the snapshot and (if not excluded) the live frequency.
    pub fn decay(&mut self) {
        self.snapshot /= 2;
        if let Some(live) = self.live.as_mut() {
            *live /= 2;
        }
    }

    /// The live frequency, if not excluded.
    pub fn live(&self) -> Option<Frequency> {
        self.live
    }

    /// The snapshot of the frequency.
    pub fn snapshot(&self) -> Frequency {
        self.snapshot
    }

    /// The net polarity count.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The value to decide for the atom: true on a non-negative polarity count, false otherwise.
    pub fn preferred_value(&self) -> bool {
        self.polarity >= 0
    }
}
