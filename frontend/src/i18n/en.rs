pub mod common {
    pub const APP_NAME: &str = "PressDesk";
    pub const LOADING: &str = "Loading...";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE: &str = "Save";
    pub const SAVING: &str = "Saving...";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
    pub const RANGE_TEMPLATE: &str = "Showing {}-{} of {}";
}

pub mod notification {
    pub const ERROR_TITLE: &str = "Something went wrong";
    pub const SUCCESS_TITLE: &str = "Done";
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod header {
    pub const NAV_ARTICLES: &str = "Articles";
    pub const NAV_CATEGORIES: &str = "Categories";
    pub const NAV_LOGIN: &str = "Login";
    pub const NAV_REGISTER: &str = "Register";
    pub const LOGOUT: &str = "Logout";
    pub const ACCOUNT_MENU_ARIA: &str = "Account menu";
}

pub mod admin_menu {
    pub const TITLE: &str = "Admin";
    pub const ARTICLES: &str = "Articles";
    pub const CATEGORIES: &str = "Categories";
}

pub mod auth {
    pub const LOGIN_TITLE: &str = "Sign in";
    pub const REGISTER_TITLE: &str = "Create an account";
    pub const ADMIN_REGISTER_TITLE: &str = "Create an admin account";
    pub const USERNAME: &str = "Username";
    pub const PASSWORD: &str = "Password";
    pub const LOGIN_SUBMIT: &str = "Login";
    pub const REGISTER_SUBMIT: &str = "Register";
    pub const SUBMITTING: &str = "Please wait...";
    pub const NO_ACCOUNT: &str = "No account yet?";
    pub const HAVE_ACCOUNT: &str = "Already registered?";
    pub const REGISTER_SUCCESS: &str = "Registration successful, please sign in";
}

pub mod article_filters {
    pub const SEARCH_PLACEHOLDER: &str = "Search by title...";
    pub const CATEGORY_ALL: &str = "All categories";
    pub const RESET: &str = "All";
}

pub mod article_table {
    pub const COL_NO: &str = "No.";
    pub const COL_TITLE: &str = "Title";
    pub const COL_AUTHOR: &str = "Author";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_DATE: &str = "Date";
    pub const COL_ACTIONS: &str = "Actions";
    pub const DETAIL: &str = "Detail";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const EMPTY: &str = "No articles found";
    pub const LOADING: &str = "Loading articles...";
}

pub mod admin_articles {
    pub const TITLE: &str = "Manage articles";
    pub const CREATE: &str = "New article";
    pub const FETCH_FAILED: &str = "Failed to fetch articles";
    pub const DELETE_FAILED: &str = "Failed to delete article";
    pub const DELETED: &str = "Article deleted";
    pub const CONFIRM_TITLE: &str = "Delete article?";
    pub const CONFIRM_BODY: &str = "This article will be removed permanently.";
}

pub mod user_articles {
    pub const TITLE: &str = "Latest articles";
    pub const READ_MORE: &str = "Read more";
}

pub mod article_form {
    pub const CREATE_TITLE: &str = "Create article";
    pub const EDIT_TITLE: &str = "Edit article";
    pub const TITLE_LABEL: &str = "Title";
    pub const CATEGORY_LABEL: &str = "Category";
    pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
    pub const CONTENT_LABEL: &str = "Content";
    pub const IMAGE_LABEL: &str = "Cover image";
    pub const IMAGE_HINT: &str = "PNG or JPG, up to 2 MB";
    pub const PREVIEW: &str = "Preview";
    pub const BACK_TO_EDIT: &str = "Back to edit";
    pub const PUBLISH: &str = "Publish";
    pub const UPDATE: &str = "Update";
    pub const CREATED: &str = "Article created";
    pub const UPDATED: &str = "Article updated";
    pub const LOAD_FAILED: &str = "Failed to load article";
}

pub mod article_detail {
    pub const UPDATED_PREFIX: &str = "Updated: ";
    pub const AUTHOR: &str = "Author";
    pub const RELATED: &str = "Related articles";
    pub const NO_RELATED: &str = "No related articles";
    pub const BACK_TO_LIST: &str = "Back to articles";
    pub const LOAD_FAILED: &str = "Failed to load article";
    pub const IMAGE_ALT: &str = "Article thumbnail";
}

pub mod categories {
    pub const TITLE: &str = "Manage categories";
    pub const CREATE: &str = "New category";
    pub const SEARCH_PLACEHOLDER: &str = "Search categories...";
    pub const COL_NO: &str = "No.";
    pub const COL_NAME: &str = "Name";
    pub const COL_CREATED: &str = "Created";
    pub const COL_ACTIONS: &str = "Actions";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const EMPTY: &str = "No categories found";
    pub const FETCH_FAILED: &str = "Failed to fetch categories";
    pub const DELETE_FAILED: &str = "Failed to delete category";
    pub const DELETED: &str = "Category deleted";
    pub const CONFIRM_TITLE: &str = "Delete category?";
    pub const CONFIRM_BODY: &str = "Articles in this category keep existing but lose their label.";
}

pub mod category_form {
    pub const CREATE_TITLE: &str = "Create category";
    pub const EDIT_TITLE: &str = "Edit category";
    pub const NAME_LABEL: &str = "Category name";
    pub const NAME_PLACEHOLDER: &str = "e.g. Technology";
    pub const CREATED: &str = "Category created";
    pub const UPDATED: &str = "Category updated";
    pub const LOAD_FAILED: &str = "Failed to load category";
}

pub mod confirm_dialog {
    pub const CONFIRM: &str = "Delete";
}

pub mod not_found {
    pub const TITLE: &str = "Page not found";
    pub const BODY: &str = "The page you requested does not exist.";
    pub const HOME: &str = "Go home";
}
