use crate::{OutputFormat, ScanArgs};
use tabled::{Table, Tabled};
use tracing::info;
use valdr_core::{ClassSet, ClasspathScanner};

#[derive(Tabled)]
struct ClassRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Class")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Location")]
    location: String,
}

pub fn run(args: &ScanArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options()?;
    let scanner = ClasspathScanner::new(&options);

    info!(
        "Scanning {} classpath entries for {:?}",
        scanner.classpath().len(),
        options.model_package_names()
    );
    let classes = scanner.find_classes_to_parse()?;

    println!("{}", render(&classes, format)?);
    Ok(())
}

fn render(classes: &ClassSet, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let list: Vec<_> = classes.iter().collect();
            serde_json::to_string_pretty(&list)
        }
        OutputFormat::Plain => Ok(classes.names().collect::<Vec<_>>().join("\n")),
        OutputFormat::Table => {
            if classes.is_empty() {
                return Ok("No classes found.".to_string());
            }
            let rows: Vec<ClassRow> = classes
                .iter()
                .map(|c| ClassRow {
                    package: c.package().to_string(),
                    name: c.simple_name().to_string(),
                    kind: c.kind.as_str(),
                    location: c.location.display().to_string(),
                })
                .collect();
            Ok(format!("{}\n{} classes", Table::new(rows), classes.len()))
        }
    }
}
