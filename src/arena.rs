//! Generational slot storage backing the solver registries.

use alloc::vec::Vec as AllocVec;

/// Slot index plus the generation it was issued for.
///
/// When a slot is freed and reused its generation is bumped, so indices
/// issued for the previous occupant stop resolving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Index {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Dense storage with stable, generation-checked indices.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: AllocVec<Slot<T>>,
    free: AllocVec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena { slots: AllocVec::new(), free: AllocVec::new(), len: 0 }
    }

    pub(crate) fn insert(&mut self, value: T) -> Index {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.generation = entry.generation.wrapping_add(1);
            entry.value = Some(value);
            Index { slot, generation: entry.generation }
        } else {
            let slot = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, value: Some(value) });
            Index { slot, generation: 0 }
        }
    }

    pub(crate) fn remove(&mut self, index: Index) -> Option<T> {
        let entry = self.slots.get_mut(index.slot as usize)?;
        if entry.generation != index.generation {
            return None;
        }
        let value = entry.value.take()?;
        self.free.push(index.slot);
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn get(&self, index: Index) -> Option<&T> {
        self.slots
            .get(index.slot as usize)
            .filter(|entry| entry.generation == index.generation)
            .and_then(|entry| entry.value.as_ref())
    }

    pub(crate) fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        self.slots
            .get_mut(index.slot as usize)
            .filter(|entry| entry.generation == index.generation)
            .and_then(|entry| entry.value.as_mut())
    }

    pub(crate) fn contains(&self, index: Index) -> bool {
        self.get(index).is_some()
    }

    /// Mutable access to two distinct live entries at once.
    pub(crate) fn pair_mut(&mut self, a: Index, b: Index) -> Option<(&mut T, &mut T)> {
        if a.slot == b.slot || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (lo, hi, swapped) = if a.slot < b.slot { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi.slot as usize);
        let first = head[lo.slot as usize].value.as_mut()?;
        let second = tail[0].value.as_mut()?;
        Some(if swapped { (second, first) } else { (first, second) })
    }

    /// Drop every entry for which `keep` returns false. Returns how many went.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let mut removed = 0;
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.value.as_ref().is_some_and(|value| !keep(value)) {
                entry.value = None;
                self.free.push(slot as u32);
                removed += 1;
            }
        }
        self.len -= removed;
        removed
    }

    pub(crate) fn clear(&mut self) {
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.value.take().is_some() {
                self.free.push(slot as u32);
            }
        }
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Index, &T)> {
        self.slots.iter().enumerate().filter_map(|(slot, entry)| {
            entry.value.as_ref().map(|value| {
                (Index { slot: slot as u32, generation: entry.generation }, value)
            })
        })
    }

    pub(crate) fn len(&self) -> usize { self.len }
}
