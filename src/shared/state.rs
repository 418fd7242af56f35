use crate::config::AppConfig;
use crate::todos::TodoStore;

pub struct AppState {
    pub config: AppConfig,
    pub store: TodoStore,
}
