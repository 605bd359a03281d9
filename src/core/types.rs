use serde::{Deserialize, Serialize};

/// Anything that can sit on an axis and may be flagged as a major tick.
pub trait MajorTick {
    fn is_major(&self) -> bool;
}

/// Plain tick carried by hosts that do not have their own tick type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick<V> {
    pub value: V,
    #[serde(default)]
    pub major: bool,
}

impl<V> Tick<V> {
    #[must_use]
    pub fn minor(value: V) -> Self {
        Self {
            value,
            major: false,
        }
    }

    #[must_use]
    pub fn major(value: V) -> Self {
        Self { value, major: true }
    }
}

impl<V> MajorTick for Tick<V> {
    fn is_major(&self) -> bool {
        self.major
    }
}

impl<T: MajorTick + ?Sized> MajorTick for &T {
    fn is_major(&self) -> bool {
        (**self).is_major()
    }
}
