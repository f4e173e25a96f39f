//! Static enumerated domains for canonical vehicle fields.
//!
//! These are the closed option lists the dealer sites' freeform text is
//! matched against. They are data, not behavior: the coercer never
//! special-cases an entry here.

/// Axle configurations, `(front wheels) x (powered wheels)` style.
pub const AXLE_CONFIGURATIONS: &[&str] = &[
    "10 x 4", "10 x 6", "10 x 8", "4 x 2", "4 x 4", "6 x 2", "6 x 4", "6 x 6", "8 x 2", "8 x 4",
    "8 x 6", "8 x 8",
];

pub const BRAKE_SYSTEM_TYPES: &[&str] = &["Air", "Hydraulic"];

pub const ENGINE_MAKES: &[&str] = &[
    "Caterpillar",
    "Chevrolet",
    "Chrysler",
    "Continental",
    "Cummins",
    "Detroit",
    "DMC",
    "Dodge",
    "Duramax",
    "Eaton",
    "Ford",
    "GMC",
    "Hercules",
    "Hino",
    "International",
    "Isuzu",
    "John Deere",
    "Mack",
    "Mercedes-Benz",
    "Mitsubishi",
    "Navistar",
    "Nissan",
    "Other",
    "PACCAR",
    "Powerstroke",
    "Renault",
    "Toyota",
    "Volvo",
    "White",
];

pub const FIFTH_WHEEL_TYPES: &[&str] = &["Fixed", "Sliding"];

/// Shared by the front and rear suspension fields.
pub const SUSPENSION_TYPES: &[&str] = &["Air Ride", "Spring"];

pub const FUEL_TYPES: &[&str] = &[
    "Bi-Fuel CNG",
    "BioDiesel",
    "Diesel",
    "Electric",
    "Flex Fuel",
    "Gasoline",
    "Hybrid Electric",
    "Natural Gas",
    "Propane",
];

pub const CAB_STYLES: &[&str] = &["Day Cab", "Sleeper Cab"];

pub const TRANSMISSION_MAKES: &[&str] = &[
    "Aisin",
    "Allison",
    "Detroit",
    "Eaton Fuller",
    "Ford",
    "GM",
    "Mack",
    "Mercedes-Benz",
    "Meritor",
    "Mitsubishi",
    "PACCAR",
    "Rockwell",
    "Spicer",
    "Torqshift",
    "Volvo",
];

pub const TRANSMISSION_SPEEDS: &[&str] = &[
    "10-speed", "12-speed", "13-speed", "15-speed", "18-speed", "2-speed", "3-speed", "4-speed",
    "5-speed", "6-speed", "7-speed", "8-speed", "9-speed",
];

pub const TRANSMISSION_TYPES: &[&str] = &["Automatic", "Manual"];

pub const VEHICLE_CONDITIONS: &[&str] = &["New", "Pre-Owned", "Used"];

pub const VEHICLE_MAKES: &[&str] = &[
    "Caterpillar",
    "Chevrolet",
    "Freightliner",
    "GMC",
    "Hino",
    "International",
    "Kenworth",
    "Mack",
    "Peterbilt",
    "Volvo",
    "Western Star",
];

/// Stringified numeric domains; matched like any other closed enum.
pub const FRONT_AXLE_COUNTS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8"];
pub const FUEL_TANK_COUNTS: &[&str] = &["1", "2", "3", "4", "5", "6"];
pub const REAR_AXLE_COUNTS: &[&str] = &["1", "2", "3", "4", "5", "6", "7"];

/// US state postal abbreviations and full names.
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Full state names, in the same order as [`US_STATES`].
pub const US_STATE_NAMES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// The model-name catalog. Dealer text rarely matches these exactly, so
/// the model field uses best-effort matching over the whole list.
pub const VEHICLE_MODELS: &[&str] = &[
    "108SD", "114SD", "122SD", "20", "195", "262", "2674SF", "268", "280", "330",
    "335", "337", "338", "348", "351", "351ST", "352", "352M", "352ST", "357",
    "359", "359EXHD", "360", "362", "365", "367", "375", "377", "378", "379",
    "379EXHD", "379X", "382", "384", "385", "386", "387", "388", "389", "389K",
    "389 Pride & Class", "389X", "537", "548", "567", "579", "4000", "4370",
    "579EV", "587", "589", "900", "4700", "47X", "4800", "4864F", "4900",
    "4900EX", "4900FA", "4900FA Lowmax", "4900FXT", "4900XD", "4946", "4964-2",
    "4964EX", "4964F", "4964FF", "4964FX", "4964X", "4984EX", "49X", "5700",
    "5700XE", "57X", "5800", "5900", "5964SS", "6900XD", "7000", "8100", "8200",
    "8400", "9000", "9100", "9200", "9300", "9400", "9600", "9670", "9700",
    "9800", "9900", "A9500", "A9513", "A9522", "ACL64", "Acterra", "Anthem 42R",
    "Anthem 42T", "Anthem 62T", "Anthem 64R", "Anthem 64T", "Anthem 84T", "Argosy",
    "AT9500", "AT9513", "B61T", "B73", "B75", "B81", "B87", "Brigadier", "Brute",
    "Business Class M2 100", "Business Class M2 106", "Business Class M2 106 Plus",
    "Business Class M2 112", "C500", "Cargostar", "Cascadia 113", "Cascadia 113 Evolution",
    "Cascadia 116", "Cascadia 125", "Cascadia 125 Evolution", "Cascadia 126", "CD825",
    "Century 112", "Century 120", "CF8000", "CH600", "CH603", "CH612", "CH613",
    "CHN612", "CHN613", "CL613", "CL653", "CL700", "CL713", "CL733", "COF4070B",
    "COF9670", "Columbia 112", "Columbia 120", "Coronado 114", "Coronado 122",
    "Coronado 122 SD", "Coronado 132", "CT660", "CT660L", "CT660S", "CT680", "CT680L",
    "DM688S", "DM690S", "DM800", "Durastar 4300", "Durastar 4400", "F2000D", "F2010A",
    "F650", "F700", "F8000", "FE42", "FL112", "FL70", "FL80", "FLA86", "FLB112",
    "FLB90", "FLC112", "FLC115", "FLC120", "FLC64T", "FLD112", "FLD112SD", "FLD120",
    "FLD120 Classic", "FLD132 Classic XL", "FLD162", "General", "Granite 64BT",
    "Granite 64FR", "Granite 64FT", "Granite 84FR", "Granite CT713", "Granite CTP713",
    "Granite CV513", "Granite CV613", "Granite CV713", "Granite GU713", "Granite GU813",
    "HV", "HX", "Icon 900", "K100", "L7500", "L7501", "L8000", "L8500", "L8501",
    "L9000", "L9500", "L9501", "L9513", "L9522", "LA9000", "LN8000", "LN9000",
    "Loadstar", "Lonestar", "LT", "LT625", "LT8500", "LT9500", "LT9501", "LT9513",
    "LTA9000", "LTL", "LTL9000", "LTLA9000", "MB80", "ME6500", "MH613", "MH653",
    "MR688S", "MRU613", "MV", "Paystar 5000", "Paystar 5070", "Paystar 5600",
    "Paystar 5900", "PI64", "Pinnacle 42R", "Pinnacle 64T", "Pinnacle CHU600",
    "Pinnacle CHU612", "Pinnacle CHU613", "Pinnacle CHU613 Rawhide", "Pinnacle CXP612",
    "Pinnacle CXP613", "Pinnacle CXU602", "Pinnacle CXU603", "Pinnacle CXU612",
    "Pinnacle CXU613", "Pinnacle CXU614", "Prostar", "R600", "R686ST", "R688",
    "R688ST", "R690ST", "RB690S", "RD600", "RD685", "RD686", "RD688", "RD688S",
    "RD688SX", "RD690S", "RD800SX", "RDF402", "RH", "RL686LST", "S2500", "S2600",
    "SC8000", "SF2574", "ST9500", "Superliner RW613", "Superliner RW736", "T2000",
    "T270", "T300", "T370", "T380", "T400", "T440", "T470", "T480", "T600", "T660",
    "T680", "T680E", "T700", "T800", "T880", "T880S", "Titan TD713", "Topkick C4500",
    "Topkick C7500", "Topkick C8500", "Transtar 4070", "Transtar 4300", "Transtar 8000",
    "Transtar 8300", "Transtar 8500", "Transtar 8600", "VHD64BT200", "VHD64BT300",
    "VHD64F300", "VHD64FT200", "VHD64FT300", "VHD64FT430", "VHD84BT200", "VHD84FT200",
    "VHD84FT400", "VHD84FT430", "Vision CX612", "Vision CX613", "Vision CXN612",
    "Vision CXN613", "VM310", "VNL42670", "VNL42780", "VNL42860", "VNL42T300",
    "VNL42T400", "VNL42T420", "VNL42T430", "VNL42T630", "VNL42T660", "VNL42T670",
    "VNL42T730", "VNL42T740", "VNL42T780", "VNL62T300", "VNL62T400", "VNL62T430",
    "VNL62T630", "VNL62T670", "VNL62T760", "VNL62T780", "VNL64T300", "VNL64T300 ARI",
    "VNL64T400", "VNL64T420", "VNL64T430", "VNL64T610", "VNL64T630", "VNL64T660",
    "VNL64T670", "VNL64T730", "VNL64T740", "VNL64T760", "VNL64T770", "VNL64T780",
    "VNL64T860", "VNL82T400", "VNL84T300", "VNL84T400", "VNL84T430", "VNL84T630",
    "VNL84T740", "VNL84T760", "VNM42T200", "VNM42T430", "VNM62T200", "VNM62T630",
    "VNM64T200", "VNM64T420", "VNM64T630", "VNM64T670", "VNM84T200", "VNR42T300",
    "VNR42T400", "VNR42T640", "VNR62T300", "VNR62T640", "VNR64T300", "VNR64T400",
    "VNR64T640", "VNR64T660", "VNR84T300", "VNR84T400", "VNR84T640", "VNX64T740",
    "VNX84T300", "VT64T800", "VT64T880", "VT84T830", "W900", "W900A", "W900B",
    "W900L", "W925", "W990", "WB123084", "WCA64T", "WCM64", "WFT8664T", "WG42",
    "WG42T", "WG64T", "WIA42", "WIA64T", "Workstar 7400", "Workstar 7500",
    "Workstar 7600", "Xpeditor",
];
