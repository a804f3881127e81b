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

//! Reading fixed-layout little-endian records out of a lump.

use std::convert::TryInto;

use na::{Vector2, Vector3};

use crate::helpers::{fixed_str, slice_to_f32, slice_to_i32};
use crate::types::{LoadError, Result};

/// A record with a fixed on-disk layout.
///
/// `read` must consume exactly `SIZE` bytes, decoding fields in the order
/// they appear in the file.
pub trait Record: Sized {
    /// Used in logs and errors.
    const NAME: &'static str;

    /// Size of one record in bytes.
    const SIZE: usize;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self>;
}

/// A cursor over the bytes of one lump.
///
/// Never reads past the end of the slice it was given; running out of bytes
/// mid-record is a [`LoadError::TruncatedStream`].
#[derive(Debug, Clone)]
pub struct LumpReader<'a> {
    lump: &'static str,
    data: &'a [u8],
    base: usize,
    pos: usize,
}

impl<'a> LumpReader<'a> {
    /// `base` is the file offset of `data[0]`, only used for error messages.
    pub fn new(lump: &'static str, data: &'a [u8], base: usize) -> LumpReader<'a> {
        LumpReader {
            lump,
            data,
            base,
            pos: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(LoadError::TruncatedStream {
                lump: self.lump,
                offset: self.base + self.pos,
                needed: count,
                available: self.remaining(),
            });
        }

        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;

        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        // read_bytes guarantees the length
        Ok(self.read_bytes(N)?.try_into().unwrap())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(slice_to_i32(self.read_bytes(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(slice_to_f32(self.read_bytes(4)?))
    }

    pub fn read_i32s<const N: usize>(&mut self) -> Result<[i32; N]> {
        let mut out = [0; N];
        for v in out.iter_mut() {
            *v = self.read_i32()?;
        }

        Ok(out)
    }

    pub fn read_vec2(&mut self) -> Result<Vector2<f32>> {
        Ok(Vector2::new(self.read_f32()?, self.read_f32()?))
    }

    pub fn read_vec3(&mut self) -> Result<Vector3<f32>> {
        Ok(Vector3::new(
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ))
    }

    pub fn read_vec3i(&mut self) -> Result<Vector3<i32>> {
        Ok(Vector3::new(
            self.read_i32()?,
            self.read_i32()?,
            self.read_i32()?,
        ))
    }

    /// Read a `len` byte string field, cut at the first NUL.
    pub fn read_fixed_str(&mut self, len: usize) -> Result<String> {
        Ok(fixed_str(self.read_bytes(len)?))
    }

    /// Read one whole record.
    pub fn read<T: Record>(&mut self) -> Result<T> {
        let start = self.pos;
        let record = T::read(self)?;
        debug_assert_eq!(self.pos - start, T::SIZE, "{} read wrong size", T::NAME);

        Ok(record)
    }
}
