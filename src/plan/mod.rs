mod phonenumber_plan;

pub use phonenumber_plan::LibPhoneNumberPlan;
