use clap::Subcommand;
use mindease_core::schema::{self, Category};

#[derive(Subcommand)]
pub enum SchemaAction {
    /// List the assessment categories
    List,
    /// Print a category's sections and questions as JSON
    Questions {
        /// Category key (social, work, selfCare, stress)
        category: Category,
    },
}

pub fn run(action: SchemaAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SchemaAction::List => {
            for category in Category::ALL {
                println!("{:<10} {}", category.key(), category.title());
            }
        }
        SchemaAction::Questions { category } => {
            let json = serde_json::to_string_pretty(schema::sections(category))?;
            println!("{json}");
        }
    }
    Ok(())
}
