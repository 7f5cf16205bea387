//! Built-in Mumbai stop table.

/// `(name, lat, lon)` in lookup order.
pub(super) const MUMBAI_STATIONS: &[(&str, f64, f64)] = &[
    // Western line
    ("CHURCHGATE", 18.9322, 72.8264),
    ("MARINE LINES", 18.9456, 72.8239),
    ("CHARNI ROAD", 18.9539, 72.8200),
    ("GRANT ROAD", 18.9633, 72.8152),
    ("MUMBAI CENTRAL", 18.9686, 72.8181),
    ("MAHALAXMI", 18.9827, 72.8186),
    ("LOWER PAREL", 18.9969, 72.8331),
    ("ELPHINSTONE ROAD", 19.0041, 72.8339),
    ("DADAR", 19.0178, 72.8478),
    ("MATUNGA ROAD", 19.0270, 72.8489),
    ("MAHIM", 19.0411, 72.8411),
    ("BANDRA", 19.0544, 72.8406),
    ("KHAR ROAD", 19.0689, 72.8372),
    ("SANTACRUZ", 19.0822, 72.8386),
    ("VILE PARLE", 19.0989, 72.8469),
    ("ANDHERI", 19.1197, 72.8469),
    ("JOGESHWARI", 19.1347, 72.8492),
    ("RAM MANDIR", 19.1481, 72.8492),
    ("GOREGAON", 19.1647, 72.8500),
    ("MALAD", 19.1864, 72.8486),
    ("KANDIVALI", 19.2039, 72.8500),
    ("BORIVALI", 19.2306, 72.8567),
    // Central line
    ("CST", 18.9398, 72.8355),
    ("MASJID", 18.9556, 72.8408),
    ("SANDHURST ROAD", 18.9644, 72.8447),
    ("BYCULLA", 18.9761, 72.8314),
    ("CHINCHPOKLI", 18.9889, 72.8283),
    ("CURREY ROAD", 19.0022, 72.8431),
    ("PAREL", 19.0069, 72.8331),
    ("KINGS CIRCLE", 19.0270, 72.8578),
    ("WADALA", 19.0169, 72.8578),
    ("KURLA", 19.0692, 72.8789),
    ("VIDYAVIHAR", 19.0825, 72.8897),
    ("GHATKOPAR", 19.0864, 72.9081),
    ("VIKHROLI", 19.1072, 72.9264),
    ("KANJURMARG", 19.1289, 72.9394),
    ("BHANDUP", 19.1447, 72.9394),
    ("NAHUR", 19.1547, 72.9547),
    ("MULUND", 19.1681, 72.9561),
    ("THANE", 19.1972, 72.9636),
    // Popular places
    ("D.N.NAGAR", 19.1744, 72.8350),
    ("BARFIWALA", 19.1744, 72.8350),
    ("PRIYDARSHINI", 19.0544, 72.8406),
    ("NAGPADA", 18.9686, 72.8181),
    ("VERSOVA", 19.1281, 72.8097),
];
