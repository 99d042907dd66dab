/// Current and maximum hit points of a card. Current health may drop below
/// zero during a fight; healing never raises it past the maximum. All
/// arithmetic saturates at the `i64` bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Health(pub i64, pub i64);

impl Health {
    pub fn full(max: i64) -> Self {
        Self(max, max)
    }

    pub fn max(&self) -> i64 {
        self.1
    }

    pub fn current(&self) -> i64 {
        self.0
    }

    /// Current health clamped at zero, as shown in logs.
    pub fn displayed(&self) -> i64 {
        self.0.max(0)
    }

    pub fn is_depleted(&self) -> bool {
        self.0 <= 0
    }

    pub fn raise_max(&mut self, amount: i64) {
        self.1 = self.1.saturating_add(amount);
    }

    pub fn restore(&mut self) {
        self.0 = self.1;
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.displayed(), self.max())
    }
}

impl std::ops::AddAssign<i64> for Health {
    fn add_assign(&mut self, other: i64) {
        self.0 = std::cmp::min(self.1, self.0.saturating_add(other));
    }
}

impl std::ops::SubAssign<i64> for Health {
    fn sub_assign(&mut self, other: i64) {
        self.0 = self.0.saturating_sub(other);
    }
}
