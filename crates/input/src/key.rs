use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A key the demo reacts to.
///
/// The browser reports physical key codes (`KeyboardEvent.code`); only these
/// five are mapped. Everything else is dropped at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Forward,
    Backward,
    Boost,
}

impl Key {
    pub const COUNT: usize = 5;
    pub const ALL: [Key; Key::COUNT] = [
        Key::Left,
        Key::Right,
        Key::Forward,
        Key::Backward,
        Key::Boost,
    ];

    /// Map a physical key code to a key, if it is one we track.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" => Some(Key::Left),
            "KeyD" => Some(Key::Right),
            "KeyW" => Some(Key::Forward),
            "KeyS" => Some(Key::Backward),
            "Space" => Some(Key::Boost),
            _ => None,
        }
    }

    /// The physical key code bound to this key.
    pub fn code(self) -> &'static str {
        match self {
            Key::Left => "KeyA",
            Key::Right => "KeyD",
            Key::Forward => "KeyW",
            Key::Backward => "KeyS",
            Key::Boost => "Space",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-size map from every [`Key`] to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyMap<T>([T; Key::COUNT]);

impl<T: Copy> KeyMap<T> {
    /// A map with every key set to `value`.
    pub fn filled(value: T) -> Self {
        Self([value; Key::COUNT])
    }

    pub fn get(&self, key: Key) -> T {
        self.0[key.index()]
    }

    pub fn set(&mut self, key: Key, value: T) {
        self.0[key.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, T)> + '_ {
        Key::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

impl<T> Index<Key> for KeyMap<T> {
    type Output = T;

    fn index(&self, key: Key) -> &T {
        &self.0[key.index()]
    }
}

impl<T> IndexMut<Key> for KeyMap<T> {
    fn index_mut(&mut self, key: Key) -> &mut T {
        &mut self.0[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_every_key() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
    }

    #[test]
    fn unknown_codes_are_ignored() {
        assert_eq!(Key::from_code("KeyQ"), None);
        assert_eq!(Key::from_code("keya"), None);
        assert_eq!(Key::from_code(""), None);
    }

    #[test]
    fn key_map_indexing() {
        let mut map = KeyMap::filled(false);
        map[Key::Boost] = true;
        assert!(map.get(Key::Boost));
        assert!(!map[Key::Left]);
        assert_eq!(map.iter().filter(|(_, v)| *v).count(), 1);
    }
}
