pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const FOLDER: &str = "📂";
    pub const DATABASE: &str = "🗄️";
}
