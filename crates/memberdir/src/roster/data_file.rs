//! Roster data-file parsing and rewriting
//!
//! The roster is a TypeScript source file. It is parsed into structured
//! member records over an opaque byte buffer: each `id: "NNNN"` field is
//! paired with the nearest following `photoUrl: "..."` field that occurs
//! before the next id field, so a lookup can never match across record
//! boundaries. Rewrites splice the quoted value in place; every byte
//! outside a spliced span is preserved exactly.

use super::error::Result;
use super::types::MemberId;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Byte range of a quoted field value (quotes excluded) plus its text
#[derive(Debug, Clone)]
struct FieldSpan {
    value: String,
    range: Range<usize>,
}

/// One member record located in the roster text
#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub id: MemberId,
    photo_url: Option<FieldSpan>,
}

/// Parsed roster file: structured records plus the raw text they index into
#[derive(Debug)]
pub struct RosterFile {
    text: String,
    records: Vec<MemberRecord>,
}

impl RosterFile {
    /// Load and parse a roster file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(text)
    }

    /// Parse roster text into records.
    ///
    /// The quoted photo value may be separated from its `photoUrl:` marker
    /// by any whitespace, including a line break.
    pub fn parse(text: String) -> Result<Self> {
        let id_re = Regex::new(r#"\bid:\s*"([0-9]{4})""#)?;
        let url_re = Regex::new(r#"\bphotoUrl:\s*"([^"]*)""#)?;

        let id_fields: Vec<(Range<usize>, MemberId)> = id_re
            .captures_iter(&text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let id = MemberId::new(caps.get(1)?.as_str())?;
                Some((whole.range(), id))
            })
            .collect();

        // (whole-match range, value range) for every photoUrl field
        let url_fields: Vec<(Range<usize>, Range<usize>)> = url_re
            .captures_iter(&text)
            .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.range())))
            .collect();

        let mut records = Vec::with_capacity(id_fields.len());
        let mut url_idx = 0usize;
        for (pos, (id_range, id)) in id_fields.iter().enumerate() {
            let record_end = id_fields
                .get(pos + 1)
                .map(|(next, _)| next.start)
                .unwrap_or(text.len());

            while url_idx < url_fields.len() && url_fields[url_idx].0.start < id_range.end {
                url_idx += 1;
            }

            let photo_url = if url_idx < url_fields.len() && url_fields[url_idx].0.start < record_end
            {
                let value_range = url_fields[url_idx].1.clone();
                Some(FieldSpan {
                    value: text[value_range.clone()].to_string(),
                    range: value_range,
                })
            } else {
                None
            };

            records.push(MemberRecord {
                id: id.clone(),
                photo_url,
            });
        }

        debug!(records = records.len(), "Parsed roster data file");
        Ok(Self { text, records })
    }

    /// Total number of records in file order (duplicates included)
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Distinct member ids, in file order
    pub fn member_ids(&self) -> Vec<MemberId> {
        let mut seen: HashSet<MemberId> = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.id.clone()))
            .map(|record| record.id.clone())
            .collect()
    }

    /// Number of distinct members in the roster
    pub fn member_count(&self) -> usize {
        self.member_ids().len()
    }

    /// Index of the first record carrying `id`
    pub fn find_record(&self, id: &MemberId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    /// Current photo reference of the record at `index`, if it has one
    pub fn photo_url(&self, index: usize) -> Option<&str> {
        self.records[index]
            .photo_url
            .as_ref()
            .map(|field| field.value.as_str())
    }

    /// Replace the photo reference of the record at `index`, returning the
    /// previous value, or `None` when the record has no reference field.
    ///
    /// Field spans after the splice point shift by the length delta; all
    /// bytes outside the spliced span are untouched.
    pub fn replace_photo_url(&mut self, index: usize, new_value: &str) -> Option<String> {
        let old = self.records[index].photo_url.clone()?;
        self.text.replace_range(old.range.clone(), new_value);

        let delta = new_value.len() as i64 - old.range.len() as i64;
        for record in self.records.iter_mut() {
            if let Some(field) = record.photo_url.as_mut() {
                if field.range.start > old.range.start {
                    field.range.start = (field.range.start as i64 + delta) as usize;
                    field.range.end = (field.range.end as i64 + delta) as usize;
                }
            }
        }

        if let Some(field) = self.records[index].photo_url.as_mut() {
            field.range.end = field.range.start + new_value.len();
            field.value = new_value.to_string();
        }
        Some(old.value)
    }

    /// The full roster text, including any splices applied so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the roster text back to disk (whole-file overwrite)
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.text)?;
        Ok(())
    }
}
