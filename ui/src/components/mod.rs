pub mod prompt_form;
pub mod response_box;
