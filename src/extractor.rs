use crate::config::ResolvedConfig;
use crate::constants::*;
use crate::document::XmlElement;
use crate::models::{AddressRecord, RecordSource};
use tracing::debug;

/// Runs both extraction passes according to the configuration.
///
/// The inline pass scans the whole document independently of the group
/// pass, so an element inside a RegAddr group that also carries its own
/// `<Address>` child yields one record per pass. That duplication is the
/// established output contract, not something to collapse here.
pub fn extract_records(root: &XmlElement, config: &ResolvedConfig) -> Vec<AddressRecord> {
    let mut records = regaddr_group_records(root, config.strip_regaddr_suffix);
    let grouped = records.len();
    if !config.only_regaddr {
        records.extend(inline_address_records(root));
    }
    debug!(
        grouped,
        inline = records.len() - grouped,
        "Extraction passes finished"
    );
    records
}

/// Extracts `<Integer>` address definitions found anywhere under a
/// `<Group Comment="RegAddr">` element.
///
/// The `Comment` match is exact and case-sensitive. When a matching group
/// nests another matching group, both subtrees are scanned independently,
/// so the inner integers are emitted once per enclosing match.
pub fn regaddr_group_records(root: &XmlElement, strip_suffix: bool) -> Vec<AddressRecord> {
    let mut records = Vec::new();
    for group in root.iter() {
        if group.local_tag() != GROUP_TAG {
            continue;
        }
        if group.attribute(COMMENT_ATTR) != Some(REGADDR_COMMENT) {
            continue;
        }
        for node in group.iter() {
            if node.local_tag() != INTEGER_TAG {
                continue;
            }
            let Some(name) = node.attribute(NAME_ATTR).filter(|n| !n.trim().is_empty()) else {
                continue;
            };
            let Some(value) = node.first_child_text(VALUE_TAG) else {
                continue;
            };
            let out_name = if strip_suffix {
                name.strip_suffix(REGADDR_SUFFIX).unwrap_or(name)
            } else {
                name
            };
            records.push(AddressRecord {
                name: out_name.to_string(),
                address: value.to_string(),
                source: RecordSource::RegAddrGroup,
                xml_tag: node.local_tag().to_string(),
                raw_name: name.to_string(),
            });
        }
    }
    records
}

/// Extracts address definitions from any named element carrying a direct
/// `<Address>` child, regardless of group membership.
///
/// Names are never suffix-stripped in this pass.
pub fn inline_address_records(root: &XmlElement) -> Vec<AddressRecord> {
    let mut records = Vec::new();
    for element in root.iter() {
        let Some(name) = element.attribute(NAME_ATTR).filter(|n| !n.trim().is_empty()) else {
            continue;
        };
        let Some(address) = element.first_child_text(ADDRESS_TAG) else {
            continue;
        };
        records.push(AddressRecord {
            name: name.to_string(),
            address: address.to_string(),
            source: RecordSource::InlineAddress,
            xml_tag: element.local_tag().to_string(),
            raw_name: name.to_string(),
        });
    }
    records
}
