//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating record database models with standard test
//! values. These are in-memory model instances that don't require database
//! interaction, suitable for unit tests.

use chrono::Utc;
use uuid::Uuid;

use crate::model::{
    CompanyModel, CustomerModel, EmployeeModel, HrManagerModel, OwnerModel, UserModel,
};

/// Create a mock user database model for testing.
///
/// Returns a UserModel with standard test values. This creates an in-memory
/// model instance without database interaction, suitable for unit tests.
///
/// # Arguments
/// - `email` - The user's email address
///
/// # Returns
/// - `UserModel` - A user model with test data
pub fn mock_user_model(email: &str) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id: Uuid::new_v4(),
        email: email.to_string(),
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock company database model for testing.
///
/// # Arguments
/// - `name` - The company name
///
/// # Returns
/// - `CompanyModel` - A company model with test data
pub fn mock_company_model(name: &str) -> CompanyModel {
    let now = Utc::now().naive_utc();
    CompanyModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock customer database model for testing.
///
/// # Arguments
/// - `user_id` - The user the customer record belongs to
/// - `company_id` - The company the customer record belongs to
///
/// # Returns
/// - `CustomerModel` - A customer model with test data
pub fn mock_customer_model(user_id: Uuid, company_id: Uuid) -> CustomerModel {
    let now = Utc::now().naive_utc();
    CustomerModel {
        id: Uuid::new_v4(),
        user_id,
        company_id,
        registration_date: now.date(),
        last_purchase_date: None,
        total_purchases: 0,
        total_spent: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock employee database model for testing.
///
/// # Arguments
/// - `user_id` - The user the employee record belongs to
/// - `company_id` - The company the employee record belongs to
///
/// # Returns
/// - `EmployeeModel` - An employee model with test data
pub fn mock_employee_model(user_id: Uuid, company_id: Uuid) -> EmployeeModel {
    let now = Utc::now().naive_utc();
    EmployeeModel {
        id: Uuid::new_v4(),
        position: "Software Engineer".to_string(),
        salary: 50_000,
        hire_date: now.date(),
        termination_date: None,
        user_id,
        company_id,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock HR manager database model for testing.
///
/// # Arguments
/// - `user_id` - The user the HR manager record belongs to
/// - `company_id` - The company the HR manager record belongs to
///
/// # Returns
/// - `HrManagerModel` - An HR manager model with test data
pub fn mock_hr_manager_model(user_id: Uuid, company_id: Uuid) -> HrManagerModel {
    let now = Utc::now().naive_utc();
    HrManagerModel {
        id: Uuid::new_v4(),
        user_id,
        company_id,
        start_date: now.date(),
        end_date: None,
        experience: 5,
        specialization: "Recruitment".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock owner database model for testing.
///
/// # Arguments
/// - `user_id` - The user the owner record belongs to
/// - `company_id` - The company the owner record belongs to
///
/// # Returns
/// - `OwnerModel` - An owner model with test data
pub fn mock_owner_model(user_id: Uuid, company_id: Uuid) -> OwnerModel {
    let now = Utc::now().naive_utc();
    OwnerModel {
        id: Uuid::new_v4(),
        user_id,
        company_id,
        start_date: now.date(),
        end_date: None,
        ownership_percentage: 100,
        created_at: now,
        updated_at: now,
    }
}
