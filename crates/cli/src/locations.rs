use crate::ScanArgs;
use tabled::{Table, Tabled};
use valdr_core::ClasspathScanner;

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Path")]
    path: String,
}

pub fn run(args: &ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options()?;
    let scanner = ClasspathScanner::new(&options);
    let locations = scanner.search_locations()?;

    if locations.is_empty() {
        println!("No classpath entry contains the configured packages.");
        return Ok(());
    }

    let rows: Vec<LocationRow> = locations
        .iter()
        .map(|l| LocationRow {
            kind: l.kind(),
            path: l.path().display().to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
