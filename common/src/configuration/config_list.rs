// Copyright 2024. The Tari Project
//
// Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
// following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
// disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
// following disclaimer in the documentation and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
// products derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
// INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
// WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
// USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::{
    fmt::{self, Display, Formatter},
    marker::PhantomData,
    ops::Deref,
    str::FromStr,
};

use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize,
    Deserializer,
    Serialize,
};

/// A list setting that may be written either as a sequence or as a single comma delimited string, so that
/// `blocked = ["a", "b"]` and `blocked = "a, b"` load identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigList<T>(Vec<T>);

impl<T> ConfigList<T> {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Default for ConfigList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ConfigList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for ConfigList<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

impl<T> FromIterator<T> for ConfigList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Display> Display for ConfigList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let items = self.0.iter().map(|item| item.to_string()).collect::<Vec<_>>();
        write!(f, "{}", items.join(", "))
    }
}

impl<'de, T> Deserialize<'de> for ConfigList<T>
where
    T: FromStr + Deserialize<'de>,
    <T as FromStr>::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        struct ConfigListVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ConfigListVisitor<T>
        where
            T: FromStr + Deserialize<'de>,
            <T as FromStr>::Err: Display,
        {
            type Value = ConfigList<T>;

            fn expecting(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "a comma delimited string or a sequence")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where E: de::Error {
                v.split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|item| T::from_str(item).map_err(E::custom))
                    .collect()
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where A: SeqAccess<'de> {
                let mut buf = seq.size_hint().map(Vec::with_capacity).unwrap_or_default();
                while let Some(v) = seq.next_element::<T>()? {
                    buf.push(v);
                }
                Ok(ConfigList(buf))
            }
        }

        deserializer.deserialize_any(ConfigListVisitor(PhantomData))
    }
}
