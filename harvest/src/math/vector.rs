pub trait VectorMath {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, scalar: f32) -> Self;
    fn lerp(self, other: Self, t: f32) -> Self;
    fn distance(self, other: Self) -> f32;
    fn length(self) -> f32;
    fn normalize(self) -> Self;
    fn is_zero(self) -> bool;
}

impl VectorMath for [f32; 2] {
    #[inline]
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1]]
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1]]
    }

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        [self[0] * scalar, self[1] * scalar]
    }

    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self.add(other.sub(self).mul(t))
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    #[inline]
    fn length(self) -> f32 {
        (self[0] * self[0] + self[1] * self[1]).sqrt()
    }

    #[inline]
    fn normalize(self) -> Self {
        if self.is_zero() {
            [0.0, 0.0]
        } else {
            let length = self.length();
            [self[0] / length, self[1] / length]
        }
    }

    #[inline]
    fn is_zero(self) -> bool {
        self[0] == 0.0 && self[1] == 0.0
    }
}

impl VectorMath for [f32; 3] {
    #[inline]
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1], self[2] + other[2]]
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1], self[2] - other[2]]
    }

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        [self[0] * scalar, self[1] * scalar, self[2] * scalar]
    }

    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self.add(other.sub(self).mul(t))
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    #[inline]
    fn length(self) -> f32 {
        (self[0] * self[0] + self[1] * self[1] + self[2] * self[2]).sqrt()
    }

    #[inline]
    fn normalize(self) -> Self {
        if self.is_zero() {
            [0.0, 0.0, 0.0]
        } else {
            let length = self.length();
            [self[0] / length, self[1] / length, self[2] / length]
        }
    }

    #[inline]
    fn is_zero(self) -> bool {
        self[0] == 0.0 && self[1] == 0.0 && self[2] == 0.0
    }
}

/// Projects a world position onto the ground plane.
#[inline]
pub fn ground(position: [f32; 3]) -> [f32; 2] {
    [position[0], position[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!([0.0, 0.0].normalize(), [0.0, 0.0]);
        assert_eq!([3.0, 4.0].normalize(), [0.6, 0.8]);
    }

    #[test]
    fn test_lerp_halfway() {
        let position = [0.0, 0.0, 0.0].lerp([2.0, 4.0, -2.0], 0.5);
        assert_eq!(position, [1.0, 2.0, -1.0]);
    }
}
