use serde::Serialize;

/// One output row; field order is the column order of the header.
#[derive(Serialize)]
struct Row<'a> {
    country: &'a str,
    region: &'a str,
    gdp: f64,
    population: f64,
    gold: u32,
    silver: u32,
    bronze: u32,
    total: u32,
}

/// (country, region, GDP in billions, population in millions, gold, silver, bronze)
const COUNTRIES: &[(&str, &str, f64, f64, u32, u32, u32)] = &[
    ("USA", "Americas", 20936.6, 331.0, 39, 41, 33),
    ("CHN", "Asia", 14722.7, 1411.1, 38, 32, 18),
    ("JPN", "Asia", 5064.9, 125.8, 27, 14, 17),
    ("GBR", "Europe", 2707.7, 67.2, 22, 21, 22),
    ("ROC", "Europe", 1483.5, 144.1, 20, 28, 23),
    ("AUS", "Oceania", 1330.9, 25.7, 17, 7, 22),
    ("NED", "Europe", 912.2, 17.4, 10, 12, 14),
    ("FRA", "Europe", 2603.0, 67.4, 10, 12, 11),
    ("GER", "Europe", 3806.1, 83.2, 10, 11, 16),
    ("ITA", "Europe", 1886.4, 59.6, 10, 10, 20),
    ("CAN", "Americas", 1643.4, 38.0, 7, 6, 11),
    ("BRA", "Americas", 1444.7, 212.6, 7, 6, 8),
    ("NZL", "Oceania", 212.5, 5.1, 7, 6, 7),
    ("CUB", "Americas", 107.4, 11.3, 7, 3, 5),
    ("HUN", "Europe", 155.8, 9.7, 6, 7, 7),
    ("KOR", "Asia", 1630.5, 51.8, 6, 4, 10),
    ("POL", "Europe", 594.2, 37.9, 4, 5, 5),
    ("CZE", "Europe", 245.3, 10.7, 4, 4, 3),
    ("KEN", "Africa", 98.8, 53.8, 4, 4, 2),
    ("NOR", "Europe", 362.2, 5.4, 4, 2, 2),
    ("JAM", "Americas", 13.8, 3.0, 4, 1, 4),
    ("ESP", "Europe", 1281.2, 47.4, 3, 8, 6),
    ("SWE", "Europe", 537.6, 10.4, 3, 6, 0),
    ("SUI", "Europe", 752.2, 8.6, 3, 4, 6),
    ("IND", "Asia", 2622.98, 1380.0, 1, 2, 4),
    ("EGY", "Africa", 363.1, 102.3, 1, 1, 4),
    ("ETH", "Africa", 107.6, 115.0, 1, 1, 2),
    ("RSA", "Africa", 301.9, 59.3, 1, 2, 0),
    ("MEX", "Americas", 1076.2, 128.9, 0, 0, 4),
    ("FIJ", "Oceania", 4.5, 0.9, 1, 0, 1),
];

fn main() {
    let output_path = "olympics.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    for &(country, region, gdp, population, gold, silver, bronze) in COUNTRIES {
        writer
            .serialize(Row {
                country,
                region,
                gdp,
                population,
                gold,
                silver,
                bronze,
                total: gold + silver + bronze,
            })
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {} countries to {output_path}", COUNTRIES.len());
}
