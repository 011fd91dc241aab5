pub mod department;
pub mod seller;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "salesdesk")]
#[command(about = "Department and seller registrations over a local SQLite store.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage departments
    #[command(alias = "dept")]
    Department {
        #[command(subcommand)]
        command: DepartmentCommands,
    },
    /// Manage sellers
    Seller {
        #[command(subcommand)]
        command: SellerCommands,
    },
}

#[derive(Subcommand)]
pub enum DepartmentCommands {
    /// List all departments
    #[command(alias = "ls")]
    List {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single department
    Show {
        /// Department id
        id: i64,
    },
    /// Create a department, or update one when --id is given
    Save {
        /// Id of the department to update
        #[arg(long)]
        id: Option<i64>,
        /// Department name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a department
    #[command(alias = "rm")]
    Remove {
        /// Department id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum SellerCommands {
    /// List sellers, optionally restricted to one department
    #[command(alias = "ls")]
    List {
        /// Only list sellers of this department id
        #[arg(long)]
        department: Option<i64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single seller
    Show {
        /// Seller id
        id: i64,
    },
    /// Create a seller, or update one when --id is given
    Save {
        /// Id of the seller to update
        #[arg(long)]
        id: Option<i64>,
        /// Seller name
        #[arg(long)]
        name: Option<String>,
        /// Seller email
        #[arg(long)]
        email: Option<String>,
        /// Birth date, formatted YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<String>,
        /// Base salary
        #[arg(long)]
        base_salary: Option<String>,
        /// Id of the department the seller belongs to
        #[arg(long)]
        department: i64,
    },
    /// Delete a seller
    #[command(alias = "rm")]
    Remove {
        /// Seller id
        id: i64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
