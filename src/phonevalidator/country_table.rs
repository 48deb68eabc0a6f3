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

use std::collections::{HashMap, VecDeque};

use crate::proto_gen::countrymetadata as proto;

use super::{
    errors::TableError,
    helper_constants::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_SIGN, PREFERRED_REGIONS},
    helper_functions::{canonical_dial_code, canonical_iso_code},
    prefix_table::PrefixTable,
    PhoneNumberType,
};

/// One row of the country table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryEntry {
    name: String,
    dial_code: String,
    iso_code: String,
}

impl CountryEntry {
    /// Creates an entry. The codes are checked and canonicalized when the
    /// entry is registered in a table.
    pub fn new(
        name: impl Into<String>,
        dial_code: impl Into<String>,
        iso_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dial_code: dial_code.into(),
            iso_code: iso_code.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dial code without a leading `+`, e.g. `"91"`.
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Upper-case ISO 3166-1 alpha-2 code, e.g. `"IN"`.
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }
}

impl From<&proto::CountryMetadata> for CountryEntry {
    fn from(value: &proto::CountryMetadata) -> Self {
        Self::new(value.name(), value.dial_code(), value.iso_code())
    }
}

/// Length and pattern constraints on the national number of a dial code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralRule {
    pattern: String,
    min_length: usize,
    max_length: usize,
}

impl StructuralRule {
    pub fn new(pattern: impl Into<String>, min_length: usize, max_length: usize) -> Self {
        Self {
            pattern: pattern.into(),
            min_length,
            max_length,
        }
    }

    /// Regular expression matched against the whole national number. A rule
    /// with an empty pattern only constrains the length.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}

/// National number prefixes per service category, as written in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePrefixes {
    pub mobile: Vec<String>,
    pub landline: Vec<String>,
    pub voip: Vec<String>,
    pub toll_free: Vec<String>,
    pub premium: Vec<String>,
    pub special: Vec<String>,
}

impl TypePrefixes {
    pub fn for_type(&self, phone_type: PhoneNumberType) -> &[String] {
        match phone_type {
            PhoneNumberType::Mobile => &self.mobile,
            PhoneNumberType::Landline => &self.landline,
            PhoneNumberType::VoIP => &self.voip,
            PhoneNumberType::TollFree => &self.toll_free,
            PhoneNumberType::Premium => &self.premium,
            PhoneNumberType::Special => &self.special,
            PhoneNumberType::Unknown => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, prefixes)| prefixes.is_empty())
    }

    fn iter(&self) -> impl Iterator<Item = (PhoneNumberType, &[String])> {
        [
            PhoneNumberType::Mobile,
            PhoneNumberType::Landline,
            PhoneNumberType::VoIP,
            PhoneNumberType::TollFree,
            PhoneNumberType::Premium,
            PhoneNumberType::Special,
        ]
        .into_iter()
        .map(move |phone_type| (phone_type, self.for_type(phone_type)))
    }
}

impl From<&proto::TypePrefixes> for TypePrefixes {
    fn from(value: &proto::TypePrefixes) -> Self {
        Self {
            mobile: value.mobile.clone(),
            landline: value.landline.clone(),
            voip: value.voip.clone(),
            toll_free: value.toll_free.clone(),
            premium: value.premium.clone(),
            special: value.special.clone(),
        }
    }
}

/// Everything known about the numbers behind one dial code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRules {
    pub structural: Option<StructuralRule>,
    pub type_prefixes: Option<TypePrefixes>,
    /// Mobile and landline numbers can't be told apart without the area code.
    pub area_code_dependent: bool,
    pub notes: Option<String>,
}

impl CountryRules {
    /// Overlays `other` on top of these rules. Fields set in `other` win.
    pub fn merge(&mut self, other: CountryRules) {
        if other.structural.is_some() {
            self.structural = other.structural;
        }
        if other.type_prefixes.is_some() {
            self.type_prefixes = other.type_prefixes;
        }
        if other.notes.is_some() {
            self.notes = other.notes;
        }
        self.area_code_dependent |= other.area_code_dependent;
    }
}

impl TryFrom<&proto::CountryRules> for CountryRules {
    type Error = TableError;

    fn try_from(value: &proto::CountryRules) -> Result<Self, Self::Error> {
        let structural = match value.structural.as_ref() {
            None => None,
            Some(rule) => {
                let min = if rule.has_min_length() { rule.min_length() as i64 } else { MIN_LENGTH_FOR_NSN as i64 };
                let max = if rule.has_max_length() { rule.max_length() as i64 } else { MAX_LENGTH_FOR_NSN as i64 };
                if min < 0 || max < 0 {
                    return Err(TableError::InvalidLengthBounds {
                        dial_code: value.dial_code().to_string(),
                        min,
                        max,
                    });
                }
                Some(StructuralRule::new(rule.pattern(), min as usize, max as usize))
            }
        };
        Ok(Self {
            structural,
            type_prefixes: value.type_prefixes.as_ref().map(TypePrefixes::from),
            area_code_dependent: value.area_code_dependent(),
            notes: value.has_notes().then(|| value.notes().to_string()),
        })
    }
}

/// A dial code which has a prefix table, with the types it can tell apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneTypeSupport {
    pub dial_code: String,
    /// Name of the preferred country for the dial code.
    pub name: String,
    pub iso_code: String,
    pub supported_types: Vec<PhoneNumberType>,
}

#[derive(Debug)]
struct DialCodeRecord {
    /// Countries using the dial code, preferred region first.
    countries: Vec<CountryEntry>,
    rules: Option<CountryRules>,
    prefix_table: Option<PrefixTable>,
}

/// Immutable lookup structure over countries, dial codes and their rules.
#[derive(Debug)]
pub struct CountryTable {
    /// Table order, duplicates by ISO code already resolved.
    countries: Vec<CountryEntry>,
    iso_to_country: HashMap<String, usize>,
    dial_codes: HashMap<String, DialCodeRecord>,
}

impl CountryTable {
    pub fn builder() -> CountryTableBuilder {
        CountryTableBuilder::default()
    }

    fn record(&self, dial_code: &str) -> Option<&DialCodeRecord> {
        let digits = dial_code.strip_prefix(PLUS_SIGN).unwrap_or(dial_code);
        self.dial_codes.get(digits)
    }

    /// Case-insensitive lookup by ISO code.
    pub fn get_country_by_iso(&self, iso_code: &str) -> Option<&CountryEntry> {
        self.iso_to_country
            .get(&iso_code.to_ascii_uppercase())
            .map(|&index| &self.countries[index])
    }

    /// Returns the preferred country for the dial code. A leading `+` is accepted.
    pub fn get_country_by_dial_code(&self, dial_code: &str) -> Option<&CountryEntry> {
        self.record(dial_code)?.countries.first()
    }

    /// All countries sharing the dial code, preferred region first.
    pub fn get_countries_for_dial_code(&self, dial_code: &str) -> &[CountryEntry] {
        self.record(dial_code)
            .map(|record| record.countries.as_slice())
            .unwrap_or_default()
    }

    pub fn has_dial_code(&self, dial_code: &str) -> bool {
        self.record(dial_code).is_some()
    }

    pub fn get_rules(&self, dial_code: &str) -> Option<&CountryRules> {
        self.record(dial_code)?.rules.as_ref()
    }

    pub fn get_structural_rule(&self, dial_code: &str) -> Option<&StructuralRule> {
        self.get_rules(dial_code)?.structural.as_ref()
    }

    pub fn get_type_prefixes(&self, dial_code: &str) -> Option<&TypePrefixes> {
        self.get_rules(dial_code)?.type_prefixes.as_ref()
    }

    pub(crate) fn get_prefix_table(&self, dial_code: &str) -> Option<&PrefixTable> {
        self.record(dial_code)?.prefix_table.as_ref()
    }

    /// Countries in table order.
    pub fn list_all_countries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.countries.iter()
    }

    pub fn countries(&self) -> &[CountryEntry] {
        &self.countries
    }

    pub(crate) fn structural_rules(&self) -> impl Iterator<Item = &StructuralRule> {
        self.dial_codes
            .values()
            .filter_map(|record| record.rules.as_ref()?.structural.as_ref())
    }

    /// One entry per dial code with a non-empty prefix table, ordered by
    /// dial code numerically.
    pub fn get_countries_with_phone_type_support(&self) -> Vec<PhoneTypeSupport> {
        let mut supported: Vec<PhoneTypeSupport> = self
            .dial_codes
            .iter()
            .filter_map(|(dial_code, record)| {
                let prefix_table = record.prefix_table.as_ref()?;
                let country = record.countries.first()?;
                Some(PhoneTypeSupport {
                    dial_code: dial_code.clone(),
                    name: country.name.clone(),
                    iso_code: country.iso_code.clone(),
                    supported_types: prefix_table.supported_types(),
                })
            })
            .collect();
        // Dial codes have no leading zeros, so a shorter one is a smaller number.
        supported.sort_by(|a, b| {
            (a.dial_code.len(), &a.dial_code).cmp(&(b.dial_code.len(), &b.dial_code))
        });
        supported
    }

    pub fn has_phone_type_support(&self, dial_code: &str, phone_type: PhoneNumberType) -> bool {
        self.get_prefix_table(dial_code)
            .is_some_and(|prefix_table| prefix_table.has_type(phone_type))
    }
}

/// Collects the table sources and checks them in [`CountryTableBuilder::build`].
///
/// Compiled metadata goes first, then custom countries and rules in
/// registration order. A country registered twice under the same ISO code
/// replaces the earlier entry in place, rules registered twice for a dial
/// code are merged with [`CountryRules::merge`].
#[derive(Debug, Default)]
pub struct CountryTableBuilder {
    metadata: Option<proto::CountryMetadataCollection>,
    countries: Vec<CountryEntry>,
    rules: Vec<(String, CountryRules)>,
    preferred_regions: Vec<(String, String)>,
}

impl CountryTableBuilder {
    pub fn metadata(mut self, metadata: proto::CountryMetadataCollection) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn country(mut self, entry: CountryEntry) -> Self {
        self.countries.push(entry);
        self
    }

    pub fn rules(mut self, dial_code: impl Into<String>, rules: CountryRules) -> Self {
        self.rules.push((dial_code.into(), rules));
        self
    }

    /// Makes `iso_code` the reported country for `dial_code`. Applied after
    /// the built-in preferences, so it overrides them.
    pub fn preferred_region(mut self, dial_code: impl Into<String>, iso_code: impl Into<String>) -> Self {
        self.preferred_regions.push((dial_code.into(), iso_code.into()));
        self
    }

    pub fn build(self) -> Result<CountryTable, TableError> {
        let metadata = self.metadata.unwrap_or_default();

        let mut countries: Vec<CountryEntry> = Vec::with_capacity(metadata.country.len() + self.countries.len());
        let mut iso_to_country = HashMap::with_capacity(countries.capacity());
        let raw_countries = metadata.country.iter().map(CountryEntry::from).chain(self.countries);
        for raw_entry in raw_countries {
            let entry = canonical_entry(raw_entry)?;
            let existing = iso_to_country.get(&entry.iso_code).copied();
            match existing {
                Some(index) => countries[index] = entry,
                None => {
                    iso_to_country.insert(entry.iso_code.clone(), countries.len());
                    countries.push(entry);
                }
            }
        }

        // Storing indices in table order, preferred regions are moved to the
        // front afterwards.
        let mut by_dial_code = HashMap::<String, VecDeque<usize>>::new();
        for (index, entry) in countries.iter().enumerate() {
            by_dial_code.entry(entry.dial_code.clone()).or_default().push_back(index);
        }

        let mut pending_rules = Vec::with_capacity(metadata.rules.len() + self.rules.len());
        for proto_rules in &metadata.rules {
            pending_rules.push((proto_rules.dial_code().to_string(), CountryRules::try_from(proto_rules)?));
        }
        pending_rules.extend(self.rules);

        let mut rules = HashMap::<String, CountryRules>::new();
        for (raw_dial_code, country_rules) in pending_rules {
            let dial_code = canonical_dial_code(&raw_dial_code)
                .ok_or_else(|| TableError::InvalidDialCode(raw_dial_code.clone()))?;
            if !by_dial_code.contains_key(dial_code) {
                return Err(TableError::UnknownDialCode(dial_code.to_string()));
            }
            check_rules(dial_code, &country_rules)?;
            rules.entry(dial_code.to_string()).or_default().merge(country_rules);
        }

        for (dial_code, iso_code) in PREFERRED_REGIONS {
            if let Some(ranked) = by_dial_code.get_mut(*dial_code) {
                promote(ranked, &countries, iso_code);
            }
        }
        for (raw_dial_code, raw_iso_code) in self.preferred_regions {
            let dial_code = canonical_dial_code(&raw_dial_code)
                .ok_or_else(|| TableError::InvalidDialCode(raw_dial_code.clone()))?;
            let iso_code = canonical_iso_code(&raw_iso_code)
                .ok_or_else(|| TableError::InvalidIsoCode(raw_iso_code.clone()))?;
            let promoted = by_dial_code
                .get_mut(dial_code)
                .is_some_and(|ranked| promote(ranked, &countries, &iso_code));
            if !promoted {
                return Err(TableError::InvalidPreferredRegion {
                    dial_code: dial_code.to_string(),
                    iso_code,
                });
            }
        }

        let dial_codes = by_dial_code
            .into_iter()
            .map(|(dial_code, ranked)| {
                let dial_code_rules = rules.remove(&dial_code);
                let prefix_table = dial_code_rules
                    .as_ref()
                    .and_then(|rules| rules.type_prefixes.as_ref())
                    .map(PrefixTable::new)
                    .filter(|prefix_table| !prefix_table.is_empty());
                let record = DialCodeRecord {
                    countries: ranked.into_iter().map(|index| countries[index].clone()).collect(),
                    rules: dial_code_rules,
                    prefix_table,
                };
                (dial_code, record)
            })
            .collect();

        Ok(CountryTable {
            countries,
            iso_to_country,
            dial_codes,
        })
    }
}

fn canonical_entry(entry: CountryEntry) -> Result<CountryEntry, TableError> {
    let dial_code = canonical_dial_code(&entry.dial_code)
        .ok_or_else(|| TableError::InvalidDialCode(entry.dial_code.clone()))?
        .to_string();
    let iso_code = canonical_iso_code(&entry.iso_code)
        .ok_or_else(|| TableError::InvalidIsoCode(entry.iso_code.clone()))?;
    Ok(CountryEntry {
        name: entry.name,
        dial_code,
        iso_code,
    })
}

fn check_rules(dial_code: &str, rules: &CountryRules) -> Result<(), TableError> {
    if let Some(structural) = &rules.structural {
        if structural.min_length > structural.max_length {
            return Err(TableError::InvalidLengthBounds {
                dial_code: dial_code.to_string(),
                min: structural.min_length as i64,
                max: structural.max_length as i64,
            });
        }
    }
    let prefixes = rules.type_prefixes.iter().flat_map(|type_prefixes| type_prefixes.iter());
    for (_, category) in prefixes {
        if let Some(prefix) = category
            .iter()
            .find(|prefix| prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(TableError::InvalidPrefix {
                dial_code: dial_code.to_string(),
                prefix: prefix.clone(),
            });
        }
    }
    Ok(())
}

/// Moves the country with `iso_code` to the front. Returns false if no
/// country of the list has it.
fn promote(ranked: &mut VecDeque<usize>, countries: &[CountryEntry], iso_code: &str) -> bool {
    let Some(position) = ranked.iter().position(|&index| countries[index].iso_code == iso_code) else {
        return false;
    };
    if let Some(index) = ranked.remove(position) {
        ranked.push_front(index);
    }
    true
}
