// Copyright (C) Oscar Shrimpton 2019

// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
// more details.

// You should have received a copy of the GNU General Public License along
// with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Marker traits for different co-ordinate systems, and functions to swizzle between them

use na::base::Scalar;
use na::{Vector2, Vector3};
use std::ops::Neg;

pub trait CoordSystem {}

/// The axes maps are authored in. Z points up.
pub struct RadiantSystem;
impl CoordSystem for RadiantSystem {}

/// The axes meshes are built in. Y points up, with X mirrored relative to Radiant.
pub struct YUpSystem;
impl CoordSystem for YUpSystem {}

pub struct Swizzler;

pub trait SwizzleFromTo<F: CoordSystem, T: CoordSystem> {
    fn swizzle<U: Scalar + Copy + Neg<Output = U>>(vec: &mut Vector3<U>);
}

/// `(x, y, z) -> (-x, z, -y)`
impl SwizzleFromTo<RadiantSystem, YUpSystem> for Swizzler {
    fn swizzle<U: Scalar + Copy + Neg<Output = U>>(vec: &mut Vector3<U>) {
        let temp = vec.y;
        vec.x = -vec.x;
        vec.y = vec.z;
        vec.z = -temp;
    }
}

/// `(x, y, z) -> (-x, -z, y)`
impl SwizzleFromTo<YUpSystem, RadiantSystem> for Swizzler {
    fn swizzle<U: Scalar + Copy + Neg<Output = U>>(vec: &mut Vector3<U>) {
        let temp = vec.y;
        vec.x = -vec.x;
        vec.y = -vec.z;
        vec.z = temp;
    }
}

/// Convert a single vector from map axes to mesh axes.
pub fn radiant_to_y_up<U: Scalar + Copy + Neg<Output = U>>(mut vec: Vector3<U>) -> Vector3<U> {
    <Swizzler as SwizzleFromTo<RadiantSystem, YUpSystem>>::swizzle(&mut vec);
    vec
}

/// Convert a single vector from mesh axes back to map axes.
pub fn y_up_to_radiant<U: Scalar + Copy + Neg<Output = U>>(mut vec: Vector3<U>) -> Vector3<U> {
    <Swizzler as SwizzleFromTo<YUpSystem, RadiantSystem>>::swizzle(&mut vec);
    vec
}

/// Map units per mesh unit, on every axis.
pub const VERTEX_SCALE: f32 = 0.03;

/// Scale a (swizzled) position into mesh units, per axis.
pub fn scale_position(position: Vector3<f32>, scale: &Vector3<f32>) -> Vector3<f32> {
    position.component_mul(scale)
}

/// Texture coordinates have v running the other way in meshes.
pub fn flip_uv(st: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(st.x, -st.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_becomes_y() {
        let v = radiant_to_y_up(Vector3::new(1.0f32, 2.0, 3.0));
        assert_eq!(v, Vector3::new(-1.0, 3.0, -2.0));
    }

    #[test]
    fn inverse_round_trips() {
        let v = Vector3::new(4i32, -5, 6);
        assert_eq!(y_up_to_radiant(radiant_to_y_up(v)), v);
        assert_eq!(radiant_to_y_up(y_up_to_radiant(v)), v);
    }

    #[test]
    fn has_order_four() {
        // Twice gives a half turn about X, four times is the identity.
        let v = Vector3::new(4i32, -5, 6);
        let twice = radiant_to_y_up(radiant_to_y_up(v));
        assert_eq!(twice, Vector3::new(4, 5, -6));
        assert_eq!(radiant_to_y_up(radiant_to_y_up(twice)), v);

        let f = Vector3::new(0.3f32, -1.2, 2.0);
        assert!((radiant_to_y_up(f).norm() - f.norm()).abs() < 1e-6);
    }
}
