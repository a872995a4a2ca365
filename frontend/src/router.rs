use pressdesk_shared::{Landing, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{header::Header, protected_route::ProtectedRoute},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[at("/admin-register")]
    AdminRegister,

    #[at("/admin/articles")]
    AdminArticles,
    #[at("/admin/articles/create")]
    AdminArticleCreate,
    #[at("/admin/articles/:id/edit")]
    AdminArticleEdit { id: String },
    #[at("/admin/articles/:id")]
    AdminArticleDetail { id: String },

    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/categories/create")]
    AdminCategoryCreate,
    #[at("/admin/categories/:id/edit")]
    AdminCategoryEdit { id: String },

    #[at("/user/articles")]
    UserArticles,
    #[at("/user/articles/:id")]
    UserArticleDetail { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Landing> for Route {
    fn from(landing: Landing) -> Self {
        match landing {
            Landing::Home => Route::Home,
            Landing::AdminArticles => Route::AdminArticles,
            Landing::UserArticles => Route::UserArticles,
        }
    }
}

const ADMIN: &[Role] = &[Role::Admin];
const USER: &[Role] = &[Role::User];

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::login::LoginPage /> },
        Route::Register => html! { <pages::register::RegisterPage role={Role::User} /> },
        Route::AdminRegister => html! { <pages::register::RegisterPage role={Role::Admin} /> },

        Route::AdminArticles => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::admin_articles::AdminArticlesPage />
            </ProtectedRoute>
        },
        Route::AdminArticleCreate => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::article_editor::ArticleEditorPage />
            </ProtectedRoute>
        },
        Route::AdminArticleEdit {
            id,
        } => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::article_editor::ArticleEditorPage id={Some(id)} />
            </ProtectedRoute>
        },
        Route::AdminArticleDetail {
            id,
        } => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::article_detail::ArticleDetailPage id={id} back={Route::AdminArticles} />
            </ProtectedRoute>
        },

        Route::AdminCategories => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::categories::CategoriesPage />
            </ProtectedRoute>
        },
        Route::AdminCategoryCreate => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::category_editor::CategoryEditorPage />
            </ProtectedRoute>
        },
        Route::AdminCategoryEdit {
            id,
        } => html! {
            <ProtectedRoute allowed={ADMIN}>
                <pages::category_editor::CategoryEditorPage id={Some(id)} />
            </ProtectedRoute>
        },

        Route::UserArticles => html! {
            <ProtectedRoute allowed={USER}>
                <pages::user_articles::UserArticlesPage />
            </ProtectedRoute>
        },
        Route::UserArticleDetail {
            id,
        } => html! {
            <ProtectedRoute allowed={USER}>
                <pages::article_detail::ArticleDetailPage id={id} back={Route::UserArticles} />
            </ProtectedRoute>
        },

        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col min-h-screen bg-[var(--bg)]">
                <Header />
                <main class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
