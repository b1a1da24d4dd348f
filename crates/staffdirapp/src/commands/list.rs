use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::paginate::paginate;
use crate::query::{process, QueryState};
use crate::store::DataStore;
use tracing::debug;

/// Run `query` against a snapshot of the store and cut out the requested page.
///
/// `listed_employees` holds the page's items; `page` carries the pagination metadata.
/// The page number is used as given; clamp it beforehand if the data may have shrunk.
pub fn run<S: DataStore>(store: &S, query: &QueryState) -> Result<CmdResult> {
    let snapshot = store.list_employees()?;
    let processed = process(snapshot, query);
    let page = paginate(&processed, query.page, query.page_size);
    debug!(
        matched = page.total_items,
        page = page.page,
        total_pages = page.total_pages,
        "listed employees"
    );

    let mut result = CmdResult::default().with_listed_employees(page.items.clone());
    if page.is_empty() {
        result.add_message(CmdMessage::info("No employees found"));
    }
    Ok(result.with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, Field, Role};
    use crate::query::SortSpec;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_page_of_the_full_directory() {
        let fixture = StoreFixture::new().with_sample_data();
        let result = run(&fixture.store, &QueryState::default()).unwrap();
        let page = result.page.unwrap();
        assert_eq!(page.total_items, 20);
        assert_eq!(page.total_pages, 2);
        assert_eq!(result.listed_employees.len(), 10);
        assert_eq!(result.listed_employees[0].id, 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn managers_by_last_name_first_page_of_five() {
        let mut fixture = StoreFixture::new().with_sample_data();
        // spread the sample across four roles
        for id in [18, 20] {
            let mut e = fixture.store.get_employee(id).unwrap();
            e.role = Role::Specialist;
            fixture.store.save_employee(&e).unwrap();
        }

        let query = QueryState::default()
            .with_filter(Field::Role, "Manager")
            .with_sort(SortSpec::asc(Field::LastName))
            .with_page(1, 5);
        let result = run(&fixture.store, &query).unwrap();

        let names: Vec<_> = result
            .listed_employees
            .iter()
            .map(|e| e.last_name.as_str())
            .collect();
        assert_eq!(names, vec!["Davis", "Doe", "Hall", "Jackson", "Lewis"]);
        let page = result.page.unwrap();
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next_page);
    }

    #[test]
    fn empty_result_adds_a_message() {
        let fixture = StoreFixture::new()
            .with_employee("Ann", "Lee", Department::IT, Role::Analyst);
        let query = QueryState::default().with_search("nobody");
        let result = run(&fixture.store, &query).unwrap();
        assert!(result.listed_employees.is_empty());
        assert_eq!(result.page.as_ref().unwrap().display_range(), (0, 0));
        assert_eq!(result.messages[0].content, "No employees found");
    }

    #[test]
    fn empty_store_has_no_pages() {
        let result = run(&InMemoryStore::new(), &QueryState::default()).unwrap();
        assert_eq!(result.page.unwrap().total_pages, 0);
    }
}
