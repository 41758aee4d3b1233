/// Which extraction pass produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Found under a `<Group Comment="RegAddr">` subtree
    RegAddrGroup,
    /// Found as an `<Address>` child of an arbitrary named element
    InlineAddress,
}

impl RecordSource {
    /// Returns the string written to the `Source` CSV column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegAddrGroup => "RegAddrGroup",
            Self::InlineAddress => "InlineAddress",
        }
    }
}

/// One extracted register address definition.
///
/// Records are immutable once constructed; the exporter sorts the full set
/// but never rewrites individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// Output name, possibly with the `_RegAddr` suffix stripped
    pub name: String,
    /// Raw address text as found in the document (hex strings stay verbatim)
    pub address: String,
    /// Extraction pass that produced the record
    pub source: RecordSource,
    /// Local tag name of the element the record came from
    pub xml_tag: String,
    /// Original `Name` attribute value before any suffix stripping
    pub raw_name: String,
}

impl AddressRecord {
    /// Composite sort key: byte-wise ascending on name, then source, then address.
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.name, self.source.as_str(), &self.address)
    }
}
