// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of rbsp-levels.
//
// rbsp-levels is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// rbsp-levels is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with rbsp-levels.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::HashMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::header::Header;
use super::lump::LumpKind;
use crate::types::{EntityParseError, Result};

const QUOTE: u8 = b'"';
const END_BRACKET: u8 = b'}';
const START_BRACKET: u8 = b'{';

/// The entity definitions, kept as the text found in the file.
///
/// Bytes that aren't valid UTF-8 are replaced with U+FFFD, so the text is
/// only verbatim for well formed lumps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityLump {
    pub text: String,
}

/// A game entity, eg a light or spawn point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub attributes: HashMap<String, String>,
}

impl Entity {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.get("classname")
    }
}

/// Internal enum to parse through the entities string.
#[derive(PartialEq, Eq)]
enum ParseState {
    InKey,
    InValue,
    AfterKey,
    InsideEntity,
    OutsideEntity,
}

impl EntityLump {
    /// Take the whole lump as text. Invalid UTF-8 is replaced, not rejected.
    pub fn from_data(data: &[u8], header: &Header) -> Result<EntityLump> {
        let entry = header.entry(LumpKind::Entities);
        let lump = header.get_lump(data, LumpKind::Entities)?;
        let text = String::from_utf8_lossy(lump).into_owned();

        debug!(
            "[Entities] Read (off={} len={} bytes={})",
            entry.offset,
            entry.length,
            lump.len()
        );
        trace!("[Entities] {}", text);

        Ok(EntityLump { text })
    }

    /// Split the text into entities and their key/value pairs.
    ///
    /// Anything outside quotes and braces (whitespace, a trailing NUL) is skipped.
    pub fn parse(&self) -> std::result::Result<Vec<Entity>, EntityParseError> {
        use self::ParseState::*;

        let string = self.text.as_str();

        let mut attrs = HashMap::new();
        let mut entities = Vec::new();

        let mut state = OutsideEntity;

        let mut key_start = 0;
        let mut key_end = 0;
        let mut val_start = 0;

        for (i, chr) in string.bytes().enumerate() {
            match chr {
                QUOTE => match state {
                    InsideEntity => {
                        state = InKey;
                        key_start = i + 1;
                    }
                    InKey => {
                        state = AfterKey;
                        key_end = i;
                    }
                    AfterKey => {
                        state = InValue;
                        val_start = i + 1;
                    }
                    InValue => {
                        state = InsideEntity;
                        attrs.insert(
                            string[key_start..key_end].to_owned(),
                            string[val_start..i].to_owned(),
                        );
                    }
                    OutsideEntity => {
                        return Err(EntityParseError::Unexpected { found: '"', at: i });
                    }
                },
                // Braces are allowed inside quoted values
                END_BRACKET if state != InKey && state != InValue => {
                    if state != InsideEntity {
                        return Err(EntityParseError::Unexpected { found: '}', at: i });
                    }

                    state = OutsideEntity;
                    entities.push(Entity {
                        attributes: std::mem::take(&mut attrs),
                    });
                }
                START_BRACKET if state != InKey && state != InValue => {
                    if state != OutsideEntity {
                        return Err(EntityParseError::Unexpected { found: '{', at: i });
                    }
                    state = InsideEntity;
                }
                _ => {}
            }
        }

        if state != OutsideEntity {
            return Err(EntityParseError::Unterminated);
        }

        Ok(entities)
    }
}
