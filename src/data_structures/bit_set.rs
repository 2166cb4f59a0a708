use std::fmt;

/// Number of bits per backing word.
const WORD_BITS: usize = 64;

/// A fixed-universe membership set over the dense integer range
/// `[0, max_element]`, packed into 64-bit words.
///
/// Capacity is fixed at construction: `add` on an element beyond
/// `max_element` is a no-op that returns `false` rather than resizing.
/// Every operation keeps the padding bits of the final partial word zero,
/// so `cardinality` and the set-algebra operations never see stray bits.
///
/// # Example
///
/// ```rust
/// use skyroute::DenseBitSet;
///
/// let mut settled = DenseBitSet::new(9);
/// assert!(settled.add(3));
/// assert!(!settled.add(3));
/// assert!(settled.contains(3));
/// assert_eq!(settled.cardinality(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBitSet {
    words: Vec<u64>,
    max_element: usize,
}

impl DenseBitSet {
    /// Creates a set able to hold elements in `[0, max_element]`, all absent.
    pub fn new(max_element: usize) -> Self {
        DenseBitSet {
            words: vec![0; max_element / WORD_BITS + 1],
            max_element,
        }
    }

    /// Replaces the backing storage with a fresh zeroed array covering
    /// `[0, max_element]`. Destructive: prior membership is dropped.
    pub fn reserve(&mut self, max_element: usize) {
        *self = DenseBitSet::new(max_element);
    }

    /// The largest element this set can hold.
    pub fn max_element(&self) -> usize {
        self.max_element
    }

    /// Adds `element` to the set.
    ///
    /// Returns `true` if the element was newly inserted, `false` if it was
    /// already present or lies beyond `max_element` (the set never resizes).
    pub fn add(&mut self, element: usize) -> bool {
        if element > self.max_element {
            return false;
        }
        let mask = 1u64 << (element % WORD_BITS);
        let word = &mut self.words[element / WORD_BITS];
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        true
    }

    /// Tests membership in O(1). Out-of-range elements are reported absent.
    pub fn contains(&self, element: usize) -> bool {
        if element > self.max_element {
            return false;
        }
        self.words[element / WORD_BITS] & (1u64 << (element % WORD_BITS)) != 0
    }

    /// Counts the elements present, one popcount per word.
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the union of the two sets. The result covers the larger of
    /// the two universes.
    pub fn union(&self, other: &DenseBitSet) -> DenseBitSet {
        let mut result = DenseBitSet::new(self.max_element.max(other.max_element));
        for (i, word) in result.words.iter_mut().enumerate() {
            *word = self.words.get(i).copied().unwrap_or(0)
                | other.words.get(i).copied().unwrap_or(0);
        }
        result
    }

    /// Returns the elements of `self` not present in `other`. The result
    /// covers `self`'s universe.
    pub fn difference(&self, other: &DenseBitSet) -> DenseBitSet {
        let mut result = self.clone();
        for (i, word) in result.words.iter_mut().enumerate() {
            *word &= !other.words.get(i).copied().unwrap_or(0);
        }
        result
    }

    /// Returns the complement with respect to `[0, max_element]`.
    ///
    /// The final word is masked down to the bits that actually belong to the
    /// universe, so padding bits past `max_element` stay zero even when the
    /// capacity is not a multiple of the word width.
    pub fn complement(&self) -> DenseBitSet {
        let mut result = DenseBitSet::new(self.max_element);
        for (i, word) in result.words.iter_mut().enumerate() {
            *word = !self.words[i];
        }
        if let Some(last) = result.words.last_mut() {
            *last &= tail_mask(self.max_element);
        }
        result
    }

    /// Whether no element is present.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Removes every element, keeping the reserved capacity.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            (0..WORD_BITS)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| i * WORD_BITS + bit)
        })
    }
}

/// Mask covering the bits of the final word that belong to the universe.
///
/// `max_element % WORD_BITS + 1` low bits are in use; when the universe ends
/// exactly on a word boundary that count is the full word width, which must
/// not be fed to a shift.
fn tail_mask(max_element: usize) -> u64 {
    let used_bits = max_element % WORD_BITS + 1;
    if used_bits == WORD_BITS {
        u64::MAX
    } else {
        (1u64 << used_bits) - 1
    }
}

impl fmt::Display for DenseBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        let mut first = true;
        for element in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
            first = false;
        }
        write!(f, " }}")
    }
}
