/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Quadratic bezier patches
//!
//! A 3x3 grid of control points is tessellated into an `(L+1) x (L+1)` grid
//! of vertices, where `L` is the tessellation level.

use std::ops::{Add, Mul};

/// `(1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`
#[inline]
pub fn quadratic_bezier<P>(t: f32, p0: P, p1: P, p2: P) -> P
where
    P: Copy + Add<Output = P> + Mul<f32, Output = P>,
{
    let a = 1.0 - t;
    p0 * (a * a) + p1 * (2.0 * a * t) + p2 * (t * t)
}

/// `level + 1` points along the curve, evenly spaced in `t`.
///
/// The endpoints are the control points themselves.
pub fn tessellate_curve<P>(level: u32, p0: P, p1: P, p2: P) -> Vec<P>
where
    P: Copy + Add<Output = P> + Mul<f32, Output = P>,
{
    let mut points = Vec::with_capacity(level as usize + 1);

    points.push(p0);
    for i in 1..level {
        let t = i as f32 / level as f32;
        points.push(quadratic_bezier(t, p0, p1, p2));
    }
    points.push(p2);

    points
}

/// Tessellate a row-major 3x3 control grid.
///
/// Each control column is tessellated first, then each output row runs
/// across the three column curves. The result is row-major, `level + 1` wide.
pub fn tessellate_grid<P>(level: u32, control: &[P; 9]) -> Vec<P>
where
    P: Copy + Add<Output = P> + Mul<f32, Output = P>,
{
    let columns: Vec<Vec<P>> = (0..3)
        .map(|x| tessellate_curve(level, control[x], control[x + 3], control[x + 6]))
        .collect();

    let width = level as usize + 1;
    let mut out = Vec::with_capacity(width * width);
    for i in 0..width {
        out.extend(tessellate_curve(
            level,
            columns[0][i],
            columns[1][i],
            columns[2][i],
        ));
    }

    out
}

/// Triangle indices for an `(level+1) x (level+1)` vertex grid.
///
/// The first and last column of each row get one triangle, every other
/// column gets two, giving `2 * level^2` triangles.
pub fn patch_indices(level: u32) -> Vec<u32> {
    let width = level + 1;
    let mut indices = Vec::with_capacity(level as usize * level as usize * 6);

    for row in 0..level {
        for col in 0..width {
            let i = row * width + col;
            if col == 0 {
                indices.extend_from_slice(&[i, i + width, i + 1]);
            } else if col == width - 1 {
                indices.extend_from_slice(&[i, i + width - 1, i + width]);
            } else {
                indices.extend_from_slice(&[i, i + width - 1, i + width]);
                indices.extend_from_slice(&[i, i + width, i + 1]);
            }
        }
    }

    indices
}
