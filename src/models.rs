//! HRMS records as returned by the backend API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An organizational department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
	pub id: u32,
	pub name: String,
}

impl Department {
	pub fn new(id: u32, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
		}
	}
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
	Active,
	Inactive,
	OnLeave,
}

impl EmployeeStatus {
	/// All statuses, in display order
	pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::OnLeave];

	/// Wire value, also used as filter value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Inactive => "inactive",
			Self::OnLeave => "on_leave",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Active => "Active",
			Self::Inactive => "Inactive",
			Self::OnLeave => "On Leave",
		}
	}
}

/// An employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
	pub id: u32,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub position: String,
	pub department: String,
	pub status: EmployeeStatus,
	pub hire_date: NaiveDate,
	#[serde(default)]
	pub salary: Option<i64>,
}

impl Employee {
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
	Planning,
	InProgress,
	Completed,
	OnHold,
}

impl ProjectStatus {
	pub const ALL: [Self; 4] = [
		Self::Planning,
		Self::InProgress,
		Self::Completed,
		Self::OnHold,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Planning => "planning",
			Self::InProgress => "in_progress",
			Self::Completed => "completed",
			Self::OnHold => "on_hold",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Planning => "Planning",
			Self::InProgress => "In Progress",
			Self::Completed => "Completed",
			Self::OnHold => "On Hold",
		}
	}
}

/// A project and its team
///
/// Projects reference their department by id; tables resolve the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
	pub id: u32,
	pub name: String,
	pub department_id: u32,
	pub manager: Option<String>,
	pub status: ProjectStatus,
	/// Employee ids assigned to the project
	#[serde(default)]
	pub team: Vec<u32>,
	pub start_date: NaiveDate,
	pub end_date: Option<NaiveDate>,
}

/// Kind of leave requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
	Annual,
	Sick,
	Unpaid,
	Parental,
}

impl LeaveType {
	pub const ALL: [Self; 4] = [Self::Annual, Self::Sick, Self::Unpaid, Self::Parental];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Annual => "annual",
			Self::Sick => "sick",
			Self::Unpaid => "unpaid",
			Self::Parental => "parental",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Annual => "Annual",
			Self::Sick => "Sick",
			Self::Unpaid => "Unpaid",
			Self::Parental => "Parental",
		}
	}
}

/// Approval state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
	Pending,
	Approved,
	Rejected,
}

impl LeaveStatus {
	pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Pending => "pending",
			Self::Approved => "approved",
			Self::Rejected => "rejected",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Pending => "Pending",
			Self::Approved => "Approved",
			Self::Rejected => "Rejected",
		}
	}
}

/// A leave request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
	pub id: u32,
	pub employee_name: String,
	pub leave_type: LeaveType,
	pub status: LeaveStatus,
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	#[serde(default)]
	pub reason: Option<String>,
}

impl LeaveRequest {
	/// Calendar days covered, both ends inclusive
	pub fn days(&self) -> i64 {
		(self.end_date - self.start_date).num_days() + 1
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_employee_from_api_json() {
		let employee: Employee = serde_json::from_value(json!({
			"id": 4,
			"first_name": "Grace",
			"last_name": "Hopper",
			"email": "grace@example.com",
			"position": "Engineer",
			"department": "Engineering",
			"status": "on_leave",
			"hire_date": "2021-03-15"
		}))
		.unwrap();
		assert_eq!(employee.status, EmployeeStatus::OnLeave);
		assert_eq!(employee.salary, None);
		assert_eq!(employee.full_name(), "Grace Hopper");
	}

	#[rstest]
	fn test_leave_days_inclusive() {
		let leave = LeaveRequest {
			id: 1,
			employee_name: "Ada".into(),
			leave_type: LeaveType::Annual,
			status: LeaveStatus::Pending,
			start_date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
			end_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
			reason: None,
		};
		assert_eq!(leave.days(), 5);
	}

	#[rstest]
	#[case(ProjectStatus::InProgress, "in_progress")]
	#[case(ProjectStatus::OnHold, "on_hold")]
	fn test_status_wire_values(#[case] status: ProjectStatus, #[case] expected: &str) {
		assert_eq!(status.as_str(), expected);
		assert_eq!(serde_json::to_value(status).unwrap(), json!(expected));
	}
}
