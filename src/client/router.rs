use dioxus::prelude::*;
use uuid::Uuid;

use crate::client::{
    components::Navbar,
    routes::{
        CustomerCreate, CustomerEdit, CustomerList, EmployeeCreate, EmployeeEdit, EmployeeList,
        Home, HrManagerCreate, HrManagerEdit, HrManagerList, NotFound, OwnerCreate, OwnerEdit,
        OwnerList,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/customers")]
    CustomerList {},

    #[route("/customers/create?:user_id&:company_id")]
    CustomerCreate { user_id: Option<Uuid>, company_id: Option<Uuid> },

    #[route("/customers/edit/:id")]
    CustomerEdit { id: Uuid },

    #[route("/employees")]
    EmployeeList {},

    #[route("/employees/create?:user_id&:company_id")]
    EmployeeCreate { user_id: Option<Uuid>, company_id: Option<Uuid> },

    #[route("/employees/edit/:id")]
    EmployeeEdit { id: Uuid },

    #[route("/hr-managers")]
    HrManagerList {},

    #[route("/hr-managers/create?:user_id&:company_id")]
    HrManagerCreate { user_id: Option<Uuid>, company_id: Option<Uuid> },

    #[route("/hr-managers/edit/:id")]
    HrManagerEdit { id: Uuid },

    #[route("/owners")]
    OwnerList {},

    #[route("/owners/create?:user_id&:company_id")]
    OwnerCreate { user_id: Option<Uuid>, company_id: Option<Uuid> },

    #[route("/owners/edit/:id")]
    OwnerEdit { id: Uuid },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
