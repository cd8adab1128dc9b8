// crates/searchhit-core/src/model/info.rs

//! # Info Entries
//!
//! Free-form `(kind, key, value)` triples attached to a hit. The kind code is
//! what travels on the wire; the key is a display label chosen by whoever
//! produced the entry.

use serde::{Deserialize, Serialize};

macro_rules! info_kinds {
    ( $( $variant:ident = $code:literal => $label:literal, )* ) => {
        /// Kind of an [`InfoEntry`]. The discriminant is the wire code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(u32)]
        pub enum InfoKind {
            $( $variant = $code, )*
        }

        impl InfoKind {
            pub const ALL: &'static [InfoKind] = &[ $( InfoKind::$variant, )* ];

            #[inline]
            pub fn code(self) -> u32 {
                self as u32
            }

            pub fn from_code(code: u32) -> Option<InfoKind> {
                match code {
                    $( $code => Some(InfoKind::$variant), )*
                    _ => None,
                }
            }

            /// English display label.
            pub fn english_label(self) -> &'static str {
                match self {
                    $( InfoKind::$variant => $label, )*
                }
            }
        }
    };
}

info_kinds! {
    DontShow = 0 => "",
    Text = 1 => "Text",
    Url = 2 => "URL",
    VisAddress = 3 => "Address",
    VisHouseNbr = 4 => "House number",
    VisZipCode = 5 => "Zip code",
    VisCompleteZip = 6 => "Complete zip",
    PhoneNumber = 7 => "Phone",
    VisZipArea = 8 => "Zip area",
    VisFullAddress = 9 => "Full address",
    FaxNumber = 10 => "Fax",
    Email = 11 => "Email",
    Brandname = 12 => "Brand name",
    ShortDescription = 13 => "Short description",
    LongDescription = 14 => "Long description",
    Citypart = 15 => "City part",
    State = 16 => "State",
    Neighborhood = 17 => "Neighborhood",
    OpenHours = 18 => "Open hours",
    NearestTrain = 19 => "Nearest train",
    StartDate = 20 => "Start date",
    EndDate = 21 => "End date",
    StartTime = 22 => "Start time",
    EndTime = 23 => "End time",
    AccommodationType = 24 => "Accommodation type",
    CheckIn = 25 => "Check in",
    CheckOut = 26 => "Check out",
    NbrOfRooms = 27 => "Number of rooms",
    SingleRoomFrom = 28 => "Single room from",
    DoubleRoomFrom = 29 => "Double room from",
    TripleRoomFrom = 30 => "Triple room from",
    SuiteFrom = 31 => "Suite from",
    ExtraBedFrom = 32 => "Extra bed from",
    WeekendRate = 33 => "Weekend rate",
    NonhotelCost = 34 => "Non-hotel cost",
    Breakfast = 35 => "Breakfast",
    HotelServices = 36 => "Hotel services",
    CreditCard = 37 => "Credit card",
    SpecialFeature = 38 => "Special feature",
    Conferences = 39 => "Conferences",
    AverageCost = 40 => "Average cost",
    BookingAdvisable = 41 => "Booking advisable",
    AdmissionCharge = 42 => "Admission charge",
    HomeDelivery = 43 => "Home delivery",
    DisabledAccess = 44 => "Disabled access",
    TakeawayAvailable = 45 => "Takeaway available",
    AllowedToBringAlcohol = 46 => "Allowed to bring alcohol",
    TypeFood = 47 => "Type of food",
    Decor = 48 => "Decor",
    ImageUrl = 49 => "Image",
    Supplier = 50 => "Supplier",
    Owner = 51 => "Owner",
    PricePetrolSuperplus = 52 => "Price petrol superplus",
    PricePetrolSuper = 53 => "Price petrol super",
    PricePetrolNormal = 54 => "Price petrol normal",
    PriceDiesel = 55 => "Price diesel",
    PriceBiodiesel = 56 => "Price biodiesel",
    FreeOfCharge = 57 => "Free of charge",
    OpenForSeason = 58 => "Open for season",
    SnowQuality = 59 => "Snow quality",
    CrossCountrySkiingKm = 60 => "Cross country skiing (km)",
    GlacierArea = 61 => "Glacier area",
    LastSnowfall = 62 => "Last snowfall",
    SkiMountainMinMaxHeight = 63 => "Mountain height (min/max m)",
    SnowDepthValleyMountain = 64 => "Snow depth (valley/mountain cm)",
    LiftsOpenTotal = 65 => "Lifts (open/total)",
    SkiSlopesOpenTotal = 66 => "Slopes (open/total km)",
    StaticId = 67 => "Static id",
    HasService = 68 => "Has service",
    HasCarwash = 69 => "Has carwash",
    Has24hSelfServiceZone = 70 => "Has 24h self service zone",
    DriveIn = 71 => "Drive in",
    MailboxCollectionTime = 72 => "Mailbox collection time",
    BookingUrl = 73 => "Booking URL",
    BookingPhoneNumber = 74 => "Booking phone number",
    PoiUrl = 75 => "POI URL",
    PoiThumb = 76 => "POI thumbnail",
    AverageRating = 77 => "Average rating",
    ProviderInfo = 78 => "Provider",
    MobilePhone = 79 => "Mobile phone",
    VisCrossing = 80 => "Crossing",
    PostDirections = 81 => "Post directions",
    ParkingPhoneNumber = 82 => "Parking phone number",
    Performer = 83 => "Performer",
    MajorRoadFeature = 84 => "Major road feature",
    UniqueIcon = 85 => "Unique icon",
    SubTypeIcon = 86 => "Subtype icon",
    TicketUrl = 87 => "Ticket URL",
    Price = 88 => "Price",
    Rating = 89 => "Rating",
}

/// One free-form detail line of a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub kind: InfoKind,
    pub key: String,
    pub value: String,
}

impl InfoEntry {
    pub fn new(kind: InfoKind, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: value.into(),
        }
    }
}
