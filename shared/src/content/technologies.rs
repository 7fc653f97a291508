use super::TechnologyEntry;

/// Technologies used by Foodgram, in display order.
pub const TECHNOLOGIES: &[TechnologyEntry] = &[
    TechnologyEntry::new(
        "Python",
        "высокоуровневый язык программирования, использующийся для создания серверной логики и работы с данными.",
    ),
    TechnologyEntry::new(
        "Django",
        "мощный веб-фреймворк для Python, который упрощает разработку веб-приложений и следит за безопасностью и производительностью.",
    ),
    TechnologyEntry::new(
        "Django REST Framework",
        "фреймворк для создания API на базе Django, обеспечивающий поддержку RESTful сервисов.",
    ),
    TechnologyEntry::new(
        "Djoser",
        "библиотека для упрощения создания аутентификации и авторизации пользователей в Django REST API.",
    ),
    TechnologyEntry::new(
        "GitHub Actions",
        "инструмент для автоматизации CI/CD процессов, позволяющий запускать тесты и развертывать код при каждом обновлении репозитория.",
    ),
    TechnologyEntry::new(
        "Docker",
        "система контейнеризации, которая позволяет упаковывать приложение с его зависимостями в контейнеры для упрощения развертывания и масштабирования.",
    ),
    TechnologyEntry::new(
        "asgiref",
        "библиотека для асинхронных операций в Django, поддерживающая протоколы WebSocket и ASGI.",
    ),
    TechnologyEntry::new(
        "sqlparse",
        "библиотека для парсинга SQL-запросов в Django.",
    ),
    TechnologyEntry::new(
        "django-filter",
        "инструмент для упрощения добавления фильтрации к данным в Django.",
    ),
    TechnologyEntry::new(
        "drf-extra-fields",
        "расширение для Django REST Framework, которое добавляет дополнительные типы полей в API.",
    ),
    TechnologyEntry::new(
        "Pillow",
        "библиотека для работы с изображениями в Python, используется для обработки изображений в проекте.",
    ),
    TechnologyEntry::new(
        "django-cors-headers",
        "библиотека для разрешения кросс-доменных запросов (CORS) в Django-приложениях.",
    ),
    TechnologyEntry::new(
        "psycopg2-binary",
        "драйвер для работы с PostgreSQL в Python, используемый для подключения базы данных к проекту.",
    ),
    TechnologyEntry::new(
        "python-decouple",
        "библиотека для управления конфигурациями приложения, позволяющая хранить настройки в отдельных файлах и переменных окружения.",
    ),
    TechnologyEntry::new(
        "python-dotenv",
        "инструмент для загрузки настроек из `.env` файлов в переменные окружения.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technologies_count_and_order() {
        let names: Vec<&str> = TECHNOLOGIES.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Python",
                "Django",
                "Django REST Framework",
                "Djoser",
                "GitHub Actions",
                "Docker",
                "asgiref",
                "sqlparse",
                "django-filter",
                "drf-extra-fields",
                "Pillow",
                "django-cors-headers",
                "psycopg2-binary",
                "python-decouple",
                "python-dotenv",
            ]
        );
    }

    #[test]
    fn test_no_empty_entries() {
        for entry in TECHNOLOGIES {
            assert!(!entry.name.trim().is_empty());
            assert!(!entry.description.trim().is_empty(), "{} has no description", entry.name);
        }
    }

    #[test]
    fn test_entries_are_plain_text() {
        for entry in TECHNOLOGIES {
            assert!(!entry.name.contains('<'));
            assert!(!entry.description.contains('<'), "{} contains markup", entry.name);
        }
    }
}
