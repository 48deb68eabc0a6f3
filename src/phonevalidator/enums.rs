// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Categorizes phone numbers by the service behind them.
///
/// The string forms (`"mobile"`, `"toll-free"`, ...) are available through
/// [`std::fmt::Display`], [`std::str::FromStr`] and [`PhoneNumberType::as_str`].
#[derive(Debug, EnumIter, Display, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// **Mobile numbers.**
    /// These numbers are assigned to wireless devices like mobile phones.
    #[strum(serialize = "mobile")]
    Mobile,
    /// **Landline numbers.**
    /// Traditional telephone numbers tied to a specific geographic location.
    #[strum(serialize = "landline")]
    Landline,
    /// **Voice over IP (VoIP) numbers.**
    /// These numbers are used for services that transmit voice calls over the internet.
    #[strum(serialize = "voip")]
    VoIP,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller, with the cost being paid by the recipient.
    /// Examples include "800" or "888" numbers in the US.
    #[strum(serialize = "toll-free")]
    TollFree,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls.
    #[strum(serialize = "premium")]
    Premium,
    /// **Special service numbers.**
    /// Short codes and other service ranges which are neither toll-free nor premium.
    #[strum(serialize = "special")]
    Special,
    /// **Unknown type.**
    /// The dial code has no prefix table or the number matches none of its prefixes.
    #[strum(serialize = "unknown")]
    Unknown,
}

impl PhoneNumberType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Tells which branch of country resolution produced a parsed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialCodeSource {
    /// The number was written in international form, e.g. `+91 98765 43210`.
    FromNumberWithPlusSign,
    /// The number started with the trunk prefix `0`, which was dropped, and the
    /// dial code was taken from the default country.
    FromDefaultCountryWithTrunkPrefix,
    /// Plain digits, the dial code was taken from the default (or assumed) country.
    FromDefaultCountry,
}

/// What to do with plain digits (no `+`, no leading `0`) when the caller gave
/// no default country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PlainDigitsPolicy {
    /// Reject the number, a default country is required.
    #[default]
    RequireDefaultCountry,
    /// Treat the number as belonging to the given ISO country.
    AssumeCountry(String),
}
