//! Common test utilities for integration tests

use std::fs;
use std::io::Write;
use std::path::Path;

/// Helper function to create a test XML file in a directory
#[allow(dead_code)]
pub fn create_test_xml_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

/// Device profile with one grouped definition and one inline address
#[allow(dead_code)]
pub const SAMPLE_PROFILE_XML: &str = r#"<?xml version="1.0"?>
<Device>
  <Group Comment="RegAddr">
    <Integer Name="Width_RegAddr"><Value>0x1000</Value></Integer>
  </Group>
  <CustomNode Name="Gain"><Address>0x2000</Address></CustomNode>
</Device>"#;

/// Same structure as [`SAMPLE_PROFILE_XML`] with every element namespaced
#[allow(dead_code)]
pub const NAMESPACED_PROFILE_XML: &str = r#"<?xml version="1.0"?>
<g:Device xmlns:g="urn:genicam/profile">
  <g:Group Comment="RegAddr">
    <g:Integer Name="Width_RegAddr"><g:Value>0x1000</g:Value></g:Integer>
  </g:Group>
  <g:CustomNode Name="Gain"><g:Address>0x2000</g:Address></g:CustomNode>
</g:Device>"#;

/// Well-formed profile with no address-bearing elements at all
#[allow(dead_code)]
pub const EMPTY_PROFILE_XML: &str = r#"<?xml version="1.0"?>
<Device>
  <Category Name="AcquisitionControl">
    <Description>No addresses here</Description>
  </Category>
</Device>"#;
