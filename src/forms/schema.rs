// src/forms/schema.rs
//
// Field tables for the add-listing form, one per listing type.

use chrono::{Datelike, Local};
use strum::{EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListingType {
    Place,
    Job,
    RealEstate,
    Car,
    Event,
}

impl ListingType {
    /// Stable identifier used in form posts: "place", "job", "realestate", ...
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn name(self) -> &'static str {
        match self {
            ListingType::Place => "Place",
            ListingType::Job => "Job",
            ListingType::RealEstate => "Real Estate",
            ListingType::Car => "Car",
            ListingType::Event => "Event",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ListingType::Place => "Restaurants, cafes, shops & locations",
            ListingType::Job => "Post job openings & opportunities",
            ListingType::RealEstate => "Properties for sale or rent",
            ListingType::Car => "Vehicles for sale or trade",
            ListingType::Event => "Create & promote events",
        }
    }

    /// Ordered field list for this type.
    pub fn fields(self) -> &'static [FieldDef] {
        match self {
            ListingType::Place => &PLACE_FIELDS,
            ListingType::Job => &JOB_FIELDS,
            ListingType::RealEstate => &REAL_ESTATE_FIELDS,
            ListingType::Car => &CAR_FIELDS,
            ListingType::Event => &EVENT_FIELDS,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Conditional fields whose visibility hangs off `parent`.
    pub fn dependents_of(self, parent: &str) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.fields()
            .iter()
            .filter(move |f| f.kind.depends_on() == Some(parent))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMax {
    Fixed(i32),
    /// The year after the current local year.
    NextYear,
}

impl NumberMax {
    pub fn resolve(self) -> i32 {
        match self {
            NumberMax::Fixed(n) => n,
            NumberMax::NextYear => Local::now().year() + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select(&'static [&'static str]),
    /// A select whose options come from the dependent-options table,
    /// keyed by the current value of `depends_on`.
    ConditionalSelect {
        depends_on: &'static str,
    },
    Number {
        min: Option<i32>,
        max: Option<NumberMax>,
    },
    Tel,
    Date,
    Time,
}

impl FieldKind {
    pub fn depends_on(&self) -> Option<&'static str> {
        match *self {
            FieldKind::ConditionalSelect { depends_on } => Some(depends_on),
            _ => None,
        }
    }

    /// The `<input type=..>` for kinds rendered as plain inputs.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Number { .. } => "number",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDef {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }
}

const fn text(name: &'static str, label: &'static str) -> FieldDef {
    FieldDef::new(name, label, FieldKind::Text)
}

const fn textarea(name: &'static str, label: &'static str) -> FieldDef {
    FieldDef::new(name, label, FieldKind::TextArea)
}

const fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldDef {
    FieldDef::new(name, label, FieldKind::Select(options))
}

const fn number(name: &'static str, label: &'static str) -> FieldDef {
    FieldDef::new(
        name,
        label,
        FieldKind::Number {
            min: None,
            max: None,
        },
    )
}

// ---- option lists ----

pub const PLACE_CATEGORIES: &[&str] = &["Restaurant", "Cafe", "Shop", "Service"];
const PRICE_RANGES: &[&str] = &["$", "$$", "$$$", "$$$$"];
const OPERATING_HOURS: &[&str] = &[
    "24/7",
    "6 AM - 10 PM",
    "8 AM - 8 PM",
    "9 AM - 6 PM",
    "10 AM - 9 PM",
    "Custom Hours",
];

const JOB_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Freelance",
    "Internship",
    "Temporary",
];
const EXPERIENCE_LEVELS: &[&str] = &[
    "Entry Level",
    "Mid Level",
    "Senior Level",
    "Executive",
    "No Experience Required",
];
const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Education",
    "Retail",
    "Manufacturing",
    "Construction",
    "Hospitality",
    "Marketing",
    "Sales",
];
const WORK_ARRANGEMENTS: &[&str] = &["On-site", "Remote", "Hybrid", "Flexible"];

const PROPERTY_TYPES: &[&str] = &[
    "Apartment",
    "House",
    "Condo",
    "Townhouse",
    "Studio",
    "Duplex",
    "Penthouse",
    "Villa",
];
const PROPERTY_LISTING_TYPES: &[&str] = &["For Sale", "For Rent", "For Lease"];
const BEDROOMS: &[&str] = &["Studio", "1", "2", "3", "4", "5", "6+"];
const BATHROOMS: &[&str] = &["1", "1.5", "2", "2.5", "3", "3.5", "4", "4+"];
const PROPERTY_CONDITIONS: &[&str] = &["New", "Excellent", "Good", "Fair", "Needs Renovation"];

const CAR_CONDITIONS: &[&str] = &["Brand New", "Nigerian Used", "Foreign Used", "Fairly Used"];
const TRANSMISSIONS: &[&str] = &["Automatic", "Manual"];
const FUEL_TYPES: &[&str] = &["Petrol", "Diesel", "Electric", "Hybrid"];
const BODY_TYPES: &[&str] = &[
    "Sedan",
    "SUV",
    "Hatchback",
    "Coupe",
    "Convertible",
    "Pickup Truck",
    "Van",
    "Wagon",
];
const COLORS: &[&str] = &[
    "Black", "White", "Silver", "Gray", "Blue", "Red", "Green", "Brown", "Gold", "Other",
];
const MAKES: &[&str] = &[
    "Toyota",
    "Honda",
    "Mercedes-Benz",
    "BMW",
    "Audi",
    "Lexus",
    "Nissan",
    "Hyundai",
    "Kia",
    "Ford",
    "Chevrolet",
    "Peugeot",
    "Volkswagen",
    "Infiniti",
    "Acura",
    "Other",
];

const EVENT_CATEGORIES: &[&str] = &[
    "Business",
    "Entertainment",
    "Educational",
    "Sports",
    "Arts & Culture",
    "Community",
    "Religious",
    "Charity",
];
const EVENT_TYPES: &[&str] = &[
    "Conference",
    "Workshop",
    "Concert",
    "Festival",
    "Seminar",
    "Networking",
    "Party",
    "Wedding",
    "Exhibition",
    "Competition",
];
const TICKET_TYPES: &[&str] = &["Free", "Paid", "Registration Required"];
const DURATIONS: &[&str] = &[
    "1-2 hours",
    "Half Day",
    "Full Day",
    "2-3 Days",
    "Week Long",
    "Ongoing",
];
const AUDIENCES: &[&str] = &[
    "All Ages",
    "Adults Only",
    "Families",
    "Professionals",
    "Students",
    "Seniors",
];

// ---- field tables ----

static PLACE_FIELDS: [FieldDef; 8] = [
    text("name", "Place Name")
        .required()
        .placeholder("Enter place name"),
    select("category", "Category", PLACE_CATEGORIES).required(),
    FieldDef::new(
        "subcategory",
        "Subcategory",
        FieldKind::ConditionalSelect {
            depends_on: "category",
        },
    ),
    textarea("address", "Address")
        .required()
        .placeholder("Enter full address"),
    FieldDef::new("phone", "Phone Number", FieldKind::Tel)
        .required()
        .placeholder("+234 XXX XXX XXXX"),
    select("priceRange", "Price Range", PRICE_RANGES),
    select("operatingHours", "Operating Hours", OPERATING_HOURS),
    textarea("description", "Description").placeholder("Tell us about this place..."),
];

static JOB_FIELDS: [FieldDef; 9] = [
    text("title", "Job Title")
        .required()
        .placeholder("e.g. Software Engineer"),
    text("company", "Company")
        .required()
        .placeholder("Company name"),
    text("location", "Location")
        .required()
        .placeholder("City, State"),
    select("jobType", "Job Type", JOB_TYPES).required(),
    select("industry", "Industry", INDUSTRIES).required(),
    select("experienceLevel", "Experience Level", EXPERIENCE_LEVELS).required(),
    text("salaryRange", "Salary Range")
        .required()
        .placeholder("Enter salary i.e $150,000"),
    select("workArrangement", "Work Arrangement", WORK_ARRANGEMENTS).required(),
    textarea("description", "Job Description")
        .required()
        .placeholder("Describe the role, responsibilities, and requirements..."),
];

static REAL_ESTATE_FIELDS: [FieldDef; 9] = [
    text("title", "Property Title")
        .required()
        .placeholder("e.g. Luxury 3BR Apartment in VI"),
    select("listingType", "Listing Type", PROPERTY_LISTING_TYPES).required(),
    select("propertyType", "Property Type", PROPERTY_TYPES).required(),
    select("bedrooms", "Bedrooms", BEDROOMS).required(),
    select("bathrooms", "Bathrooms", BATHROOMS).required(),
    number("price", "Price (₦)")
        .required()
        .placeholder("Enter price"),
    textarea("address", "Address")
        .required()
        .placeholder("Full property address"),
    select("condition", "Property Condition", PROPERTY_CONDITIONS).required(),
    textarea("description", "Property Description")
        .required()
        .placeholder("Describe the property features, amenities, etc..."),
];

static CAR_FIELDS: [FieldDef; 12] = [
    select("make", "Make", MAKES).required(),
    text("model", "Model")
        .required()
        .placeholder("e.g. Camry, Accord, C300"),
    FieldDef::new(
        "year",
        "Year",
        FieldKind::Number {
            min: Some(1990),
            max: Some(NumberMax::NextYear),
        },
    )
    .required()
    .placeholder("e.g. 2020"),
    select("condition", "Condition", CAR_CONDITIONS).required(),
    number("mileage", "Mileage (km)").placeholder("Current mileage"),
    select("transmission", "Transmission", TRANSMISSIONS).required(),
    select("fuelType", "Fuel Type", FUEL_TYPES).required(),
    select("bodyType", "Body Type", BODY_TYPES).required(),
    select("color", "Color", COLORS).required(),
    number("price", "Price (₦)")
        .required()
        .placeholder("Asking price"),
    text("location", "Location")
        .required()
        .placeholder("City, State"),
    textarea("description", "Additional Details")
        .placeholder("Any additional information about the vehicle..."),
];

static EVENT_FIELDS: [FieldDef; 13] = [
    text("name", "Event Name")
        .required()
        .placeholder("Name of your event"),
    select("category", "Category", EVENT_CATEGORIES).required(),
    select("eventType", "Event Type", EVENT_TYPES).required(),
    FieldDef::new("date", "Start Date", FieldKind::Date).required(),
    FieldDef::new("endDate", "End Date", FieldKind::Date),
    FieldDef::new("time", "Start Time", FieldKind::Time).required(),
    select("duration", "Duration", DURATIONS).required(),
    text("location", "Venue/Location")
        .required()
        .placeholder("Event venue or address"),
    select("ticketType", "Ticket Type", TICKET_TYPES).required(),
    number("ticketPrice", "Ticket Price (₦)").placeholder("Price per ticket (if paid)"),
    select("audience", "Target Audience", AUDIENCES).required(),
    number("capacity", "Maximum Capacity").placeholder("Maximum attendees"),
    textarea("description", "Event Description")
        .required()
        .placeholder("Describe your event, what attendees can expect..."),
];
