use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::meta::Meta;
use crate::rdata::RdataValue;

fn meta_is_unset(meta: &Option<Meta>) -> bool {
    meta.as_ref().map_or(true, Meta::is_empty)
}

/// One candidate response value set for a DNS record.
///
/// An answer holds the raw response data in record-type order (for SRV:
/// priority, weight, port, target), plus the optional region grouping and
/// per-answer steering metadata the API attaches to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Server-assigned identifier; absent until the answer exists upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Steering metadata. Constructors install an empty value; an empty
    /// value and an absent one encode identically.
    #[serde(default, skip_serializing_if = "meta_is_unset")]
    pub meta: Option<Meta>,

    /// Answer response data. eg:
    /// A:   ["1.1.1.1"]
    /// AAAA: ["2001:db8:85a3::8a2e:370:7334"]
    /// MX:  ["10", "mail.example.com"]
    #[serde(rename = "answer")]
    pub rdata: Vec<RdataValue>,

    /// Region (grouping) this answer belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Answer {
    /// Creates a generic answer with the given rdata.
    pub fn new(rdata: Vec<RdataValue>) -> Self {
        Self {
            id: None,
            meta: Some(Meta::default()),
            rdata,
            region: None,
        }
    }

    /// Creates a generic answer from raw JSON values.
    ///
    /// Fails only when an element is not a string or an integer.
    pub fn from_raw(rdata: Vec<serde_json::Value>) -> Result<Self, ModelError> {
        let rdata = rdata
            .into_iter()
            .map(RdataValue::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rdata))
    }

    /// Creates an answer for an A record.
    pub fn a(host: impl Into<String>) -> Self {
        Self::new(vec![RdataValue::Str(host.into())])
    }

    /// Creates an answer for an AAAA record.
    pub fn aaaa(host: impl Into<String>) -> Self {
        Self::new(vec![RdataValue::Str(host.into())])
    }

    /// Creates an answer for an ALIAS record.
    pub fn alias(host: impl Into<String>) -> Self {
        Self::new(vec![RdataValue::Str(host.into())])
    }

    /// Creates an answer for a CNAME record.
    pub fn cname(name: impl Into<String>) -> Self {
        Self::new(vec![RdataValue::Str(name.into())])
    }

    /// Creates an answer for a TXT record.
    pub fn txt(text: impl Into<String>) -> Self {
        Self::new(vec![RdataValue::Str(text.into())])
    }

    /// Creates an answer for an MX record.
    pub fn mx(priority: u16, host: impl Into<String>) -> Self {
        Self::new(vec![
            RdataValue::Str(priority.to_string()),
            RdataValue::Str(host.into()),
        ])
    }

    /// Creates an answer for a CAA record.
    pub fn caa(priority: u16, issuance: impl Into<String>, ca: impl Into<String>) -> Self {
        Self::new(vec![
            RdataValue::Str(priority.to_string()),
            RdataValue::Str(issuance.into()),
            RdataValue::Str(ca.into()),
        ])
    }

    /// Creates an answer for an SRV record.
    pub fn srv(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self::new(vec![
            RdataValue::Str(priority.to_string()),
            RdataValue::Str(weight.to_string()),
            RdataValue::Str(port.to_string()),
            RdataValue::Str(target.into()),
        ])
    }

    /// Associates a region with this answer.
    pub fn set_region(&mut self, name: impl Into<String>) {
        self.region = Some(name.into());
    }
}

impl fmt::Display for Answer {
    /// Renders the rdata as a comma-separated list, no brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.rdata.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, ", {value}")?;
            }
        }
        Ok(())
    }
}
