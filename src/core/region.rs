use crate::models::Region;

/// Classify a country name into a region bucket
///
/// Exact, case-sensitive lookup against a fixed table. Anything not listed
/// falls through to [`Region::Other`].
pub fn classify_region(country: &str) -> Region {
    match country {
        "UK" | "United Kingdom" | "England" | "Scotland" | "Wales" | "Ireland" | "Belgium"
        | "Netherlands" | "Germany" | "France" | "Spain" | "Portugal" | "Italy" | "Switzerland"
        | "Austria" | "Denmark" | "Sweden" | "Norway" | "Finland" | "Iceland" | "Poland"
        | "Czech Republic" | "Hungary" | "Croatia" | "Serbia" | "Romania" | "Greece"
        | "Malta" | "Montenegro" | "Slovakia" | "Slovenia" | "Estonia" | "Latvia"
        | "Lithuania" => Region::Europe,
        "USA" | "United States" => Region::Usa,
        "Japan" | "South Korea" | "China" | "Taiwan" | "Thailand" | "Vietnam" | "Indonesia"
        | "Philippines" | "Malaysia" | "Singapore" | "India" => Region::Asia,
        "Australia" | "New Zealand" => Region::Oceania,
        "Brazil" | "Argentina" | "Chile" | "Colombia" | "Peru" | "Uruguay" => {
            Region::SouthAmerica
        }
        _ => Region::Other,
    }
}
