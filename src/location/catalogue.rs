//! Built-in targeting catalogue.

/// Indian states and union territories with their major cities.
pub const INDIA_STATES_CITIES: &[(&str, &[&str])] = &[
    ("Andhra Pradesh", &["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Tirupati"]),
    ("Arunachal Pradesh", &["Itanagar", "Tawang", "Ziro"]),
    ("Assam", &["Guwahati", "Dibrugarh", "Silchar", "Tezpur"]),
    ("Bihar", &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur"]),
    ("Chhattisgarh", &["Raipur", "Bhilai", "Bilaspur", "Korba"]),
    ("Goa", &["Panaji", "Margao", "Vasco da Gama"]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara", "Rajkot"]),
    ("Haryana", &["Gurgaon", "Faridabad", "Panipat", "Hisar"]),
    ("Himachal Pradesh", &["Shimla", "Manali", "Dharamshala"]),
    ("Jharkhand", &["Ranchi", "Jamshedpur", "Dhanbad", "Bokaro"]),
    ("Karnataka", &["Bengaluru", "Mysuru", "Mangalore", "Hubli"]),
    ("Kerala", &["Kochi", "Thiruvananthapuram", "Kozhikode"]),
    ("Madhya Pradesh", &["Bhopal", "Indore", "Gwalior", "Jabalpur"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"]),
    ("Manipur", &["Imphal"]),
    ("Meghalaya", &["Shillong"]),
    ("Mizoram", &["Aizawl"]),
    ("Nagaland", &["Kohima", "Dimapur"]),
    ("Odisha", &["Bhubaneswar", "Cuttack", "Rourkela"]),
    ("Punjab", &["Ludhiana", "Amritsar", "Jalandhar", "Patiala"]),
    ("Rajasthan", &["Jaipur", "Jodhpur", "Udaipur", "Kota"]),
    ("Sikkim", &["Gangtok"]),
    ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai", "Salem"]),
    ("Telangana", &["Hyderabad", "Warangal", "Nizamabad"]),
    ("Tripura", &["Agartala"]),
    ("Uttar Pradesh", &["Lucknow", "Noida", "Kanpur", "Varanasi", "Agra"]),
    ("Uttarakhand", &["Dehradun", "Haridwar", "Nainital"]),
    ("West Bengal", &["Kolkata", "Siliguri", "Asansol", "Howrah", "Durgapur", "Malda"]),
    ("Delhi", &["New Delhi", "Dwarka", "Rohini", "South Delhi"]),
    ("Jammu and Kashmir", &["Srinagar", "Jammu"]),
    ("Ladakh", &["Leh", "Kargil"]),
    ("Chandigarh", &["Chandigarh"]),
    ("Puducherry", &["Puducherry"]),
    ("Andaman and Nicobar Islands", &["Port Blair"]),
    ("Dadra and Nagar Haveli and Daman and Diu", &["Daman", "Silvassa"]),
];

/// Supported countries and their `gl` codes.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("India", "in"),
    ("United States", "us"),
    ("United Kingdom", "uk"),
    ("Canada", "ca"),
    ("Australia", "au"),
];
