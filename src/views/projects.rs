//! Project list table
//!
//! Project records carry a department id, but the department filter is
//! keyed by department name, so this table uses a custom filter predicate.

use crate::models::{Department, Project, ProjectStatus};
use crate::views::date_value;
use hrms_tables::{Field, FieldValue, FilterGroup, Filters, TableDefinition};
use std::collections::HashMap;
use std::sync::Arc;

/// Project table with department names resolved from `departments`
///
/// Projects whose department id is unknown show an empty department and
/// never match a department filter.
pub fn project_table(departments: &[Department]) -> TableDefinition<Project> {
	let names: Arc<HashMap<u32, String>> = Arc::new(
		departments
			.iter()
			.map(|d| (d.id, d.name.clone()))
			.collect(),
	);

	let department_group = departments
		.iter()
		.fold(FilterGroup::new("department", "Department"), |group, d| {
			group.option(d.name.as_str(), d.name.as_str())
		});
	let status_group = ProjectStatus::ALL
		.iter()
		.fold(FilterGroup::new("status", "Status"), |group, s| {
			group.option(s.as_str(), s.label())
		});

	let field_names = Arc::clone(&names);
	let predicate_names = Arc::clone(&names);

	TableDefinition::new()
		.field(Field::new("name", "Project", |p: &Project| p.name.as_str().into()).searchable(true))
		.field(Field::new("department", "Department", move |p: &Project| {
			FieldValue::from(field_names.get(&p.department_id).cloned())
		}))
		.field(
			Field::new("manager", "Manager", |p: &Project| p.manager.as_deref().into())
				.searchable(true),
		)
		.field(Field::new("status", "Status", |p: &Project| p.status.as_str().into()))
		.field(Field::new("team_size", "Team Size", |p: &Project| {
			FieldValue::Int(p.team.len() as i64)
		}))
		.field(Field::new("start_date", "Start", |p: &Project| date_value(p.start_date)))
		.field(Field::new("end_date", "End", |p: &Project| {
			p.end_date.map_or(FieldValue::Null, date_value)
		}))
		.filter_group(department_group)
		.filter_group(status_group)
		.filter_predicate(move |p: &Project, filters: &Filters| {
			let department = filters.get("department").is_none_or(|wanted| {
				predicate_names
					.get(&p.department_id)
					.is_some_and(|name| wanted.matches(name))
			});
			let status = filters
				.get("status")
				.is_none_or(|wanted| wanted.matches(p.status.as_str()));
			department && status
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use hrms_tables::{FilterValue, SortDirection, TableState};
	use rstest::{fixture, rstest};

	fn project(
		id: u32,
		name: &str,
		department_id: u32,
		status: ProjectStatus,
		team: usize,
	) -> Project {
		Project {
			id,
			name: name.to_string(),
			department_id,
			manager: (id != 3).then(|| format!("Manager {id}")),
			status,
			team: (0..team as u32).collect(),
			start_date: NaiveDate::from_ymd_opt(2024, id, 1).unwrap(),
			end_date: None,
		}
	}

	#[fixture]
	fn departments() -> Vec<Department> {
		vec![Department::new(10, "Engineering"), Department::new(20, "Marketing")]
	}

	#[fixture]
	fn projects() -> Vec<Project> {
		vec![
			project(1, "Payroll Revamp", 10, ProjectStatus::InProgress, 4),
			project(2, "Brand Refresh", 20, ProjectStatus::Planning, 2),
			project(3, "Onboarding Portal", 10, ProjectStatus::Completed, 6),
			project(4, "Orphaned Initiative", 99, ProjectStatus::InProgress, 1),
		]
	}

	fn ids(rows: &[&Project]) -> Vec<u32> {
		rows.iter().map(|p| p.id).collect()
	}

	#[rstest]
	fn test_department_filter_uses_resolved_name(
		departments: Vec<Department>,
		projects: Vec<Project>,
	) {
		let table = project_table(&departments);
		let state = TableState::new(10).set_filter("department", Some("Engineering".into()));
		assert_eq!(ids(&table.derive(&projects, &state).rows), vec![1, 3]);

		// The raw id is not a department filter value.
		let state = state.set_filter("department", Some("10".into()));
		assert!(table.derive(&projects, &state).rows.is_empty());
	}

	#[rstest]
	fn test_department_and_status(departments: Vec<Department>, projects: Vec<Project>) {
		let table = project_table(&departments);
		let state = TableState::new(10)
			.set_filter("department", Some(FilterValue::from(vec!["Engineering", "Marketing"])))
			.set_filter("status", Some("in_progress".into()));
		assert_eq!(ids(&table.derive(&projects, &state).rows), vec![1]);
	}

	#[rstest]
	fn test_unknown_department_sorts_last(departments: Vec<Department>, projects: Vec<Project>) {
		let table = project_table(&departments);
		let state = TableState::new(10).set_sort("department", SortDirection::Desc);
		assert_eq!(ids(&table.derive(&projects, &state).rows), vec![2, 1, 3, 4]);
	}

	#[rstest]
	fn test_search_manager_and_team_sort(departments: Vec<Department>, projects: Vec<Project>) {
		let table = project_table(&departments);
		let state = TableState::new(10)
			.set_search_term("manager")
			.set_sort("team_size", SortDirection::Desc);
		// project 3 has no manager
		assert_eq!(ids(&table.derive(&projects, &state).rows), vec![1, 2, 4]);
	}
}
