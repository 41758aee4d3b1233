// Default file paths
pub const DEFAULT_INPUT: &str = "modules/xml/Hikrobot_Smart_Device_Profile.xml";
pub const DEFAULT_OUTPUT: &str = "regaddr.csv";

// GenICam element and attribute names (matched on local names, namespace prefixes stripped)
pub const GROUP_TAG: &str = "Group";
pub const INTEGER_TAG: &str = "Integer";
pub const VALUE_TAG: &str = "Value";
pub const ADDRESS_TAG: &str = "Address";
pub const NAME_ATTR: &str = "Name";
pub const COMMENT_ATTR: &str = "Comment";

// Marker on <Group> elements that hold register address definitions
pub const REGADDR_COMMENT: &str = "RegAddr";

// Suffix stripped from grouped register names unless disabled
pub const REGADDR_SUFFIX: &str = "_RegAddr";
