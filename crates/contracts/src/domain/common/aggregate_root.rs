use super::{EntityMetadata, Origin};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "SAL-2025-001")
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции, из которого строится путь API (например, "products")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Товар")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Товары")
    fn list_name() -> &'static str;

    /// Источник данных
    fn origin() -> Origin;
}
