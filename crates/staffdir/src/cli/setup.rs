use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use staffdirapp::model::{Department, EmployeeDraft, EmployeeId, Field, Role};
use staffdirapp::query::{QueryState, SortDirection, SortSpec};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled cards for humans
    #[default]
    Term,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "staffdir",
    bin_name = "staffdir",
    version,
    disable_help_subcommand = true,
    about = "Browse and edit an employee directory",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding staffdir.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Load employees from this JSON file instead of the built-in sample
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub seed: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Term,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees matching a query, one page at a time
    #[command(alias = "ls", display_order = 1)]
    List(QueryArgs),

    /// Show employees by id
    #[command(alias = "v", display_order = 2)]
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<EmployeeId>,
    },

    /// Headcounts by department and role
    #[command(display_order = 3)]
    Stats(QueryArgs),

    /// Interactive session: browse, add, edit and delete
    #[command(alias = "sh", display_order = 4)]
    Shell,
}

#[derive(Args, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Match first name, last name or email (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub first_name: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub last_name: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub email: Option<String>,

    #[arg(short, long)]
    pub department: Option<Department>,

    #[arg(short, long)]
    pub role: Option<Role>,

    /// Sort by firstName, lastName, email, department or role
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<Field>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Employees per page [default: from config]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
}

impl QueryArgs {
    pub fn to_query(&self, default_page_size: usize) -> QueryState {
        let mut query = QueryState::default();
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        let text_filters = [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::Email, &self.email),
        ];
        for (field, value) in text_filters {
            if let Some(value) = value {
                query = query.with_filter(field, value.clone());
            }
        }
        if let Some(department) = self.department {
            query = query.with_filter(Field::Department, department.as_str());
        }
        if let Some(role) = self.role {
            query = query.with_filter(Field::Role, role.as_str());
        }
        if let Some(field) = self.sort {
            let direction = if self.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            query = query.with_sort(SortSpec { field, direction });
        }
        let page_size = self
            .page_size
            .map_or(default_page_size, |size| size as usize);
        query.with_page(self.page.max(1), page_size)
    }
}

/// One line typed into `staffdir shell`.
#[derive(Parser, Debug)]
#[command(
    name = "staffdir",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Redraw the current page
    #[command(alias = "ls")]
    List,

    /// Search names and email; no term clears the search
    Search { term: Vec<String> },

    /// Filter on a field; no value clears that filter
    Filter { field: Field, value: Vec<String> },

    /// Clear the search and every filter
    Clear,

    /// Sort by a field (repeat to flip direction); no field clears sorting
    Sort {
        field: Option<Field>,
        #[arg(long, conflicts_with = "asc")]
        desc: bool,
        #[arg(long)]
        asc: bool,
    },

    /// Jump to a page
    Page { number: usize },

    /// Next page
    #[command(alias = "n")]
    Next,

    /// Previous page
    #[command(alias = "p")]
    Prev,

    /// Change the page size
    Size { page_size: usize },

    /// Show employees by id
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<EmployeeId>,
    },

    /// Add an employee
    Add(DraftArgs),

    /// Edit an employee; omitted fields keep their current values
    Edit {
        id: EmployeeId,
        #[command(flatten)]
        changes: DraftArgs,
    },

    /// Leave edit mode after a failed edit
    Cancel,

    /// Delete an employee
    #[command(alias = "rm")]
    Delete { id: EmployeeId },

    /// Headcounts for the directory and the current query
    Stats,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Default, Clone)]
pub struct DraftArgs {
    #[arg(long, short = 'f')]
    pub first_name: Option<String>,
    #[arg(long, short = 'l')]
    pub last_name: Option<String>,
    #[arg(long, short = 'e')]
    pub email: Option<String>,
    #[arg(long, short = 'd')]
    pub department: Option<String>,
    #[arg(long, short = 'r')]
    pub role: Option<String>,
}

impl DraftArgs {
    /// Overlay the given fields onto `draft`.
    pub fn apply(&self, mut draft: EmployeeDraft) -> EmployeeDraft {
        let fields = [
            (&mut draft.first_name, &self.first_name),
            (&mut draft.last_name, &self.last_name),
            (&mut draft.email, &self.email),
            (&mut draft.department, &self.department),
            (&mut draft.role, &self.role),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        draft
    }
}
